// src/gui/app.rs
//
// App owns everything the UI needs: the catalog loaded once at startup,
// the current province filter, the derived row-index view, and the
// texture cache. Single-threaded; a selection change triggers a full
// view recompute and nothing else.

use std::error::Error;
use std::path::PathBuf;

use eframe::egui;

use crate::catalog::{Catalog, FilteredView, ProvinceFilter};
use crate::consts::APP_TITLE;
use crate::load::{self, Loaded};

use super::{components, fonts, images::ImageCache};

pub fn run(options: eframe::NativeOptions, data_dir: PathBuf) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            fonts::install_thai_fallback(&cc.egui_ctx);
            Ok(Box::new(App::new(data_dir)))
        }),
    )?;
    Ok(())
}

pub struct App {
    pub catalog: Catalog,
    pub provinces: Vec<String>,

    pub filter: ProvinceFilter,
    pub view: FilteredView,

    // Non-fatal loader warnings, shown above the list
    pub warnings: Vec<String>,

    pub images: ImageCache,
}

impl App {
    pub fn new(data_dir: PathBuf) -> Self {
        let Loaded { catalog, source, warnings } = load::load_catalog(&data_dir);

        logf!(
            "Init: {} records from {:?} ({})",
            catalog.len(),
            source,
            data_dir.display()
        );

        let provinces = catalog.provinces();
        let filter = ProvinceFilter::All;
        let view = FilteredView::from_catalog(&catalog, &filter);

        Self {
            catalog,
            provinces,
            filter,
            view,
            warnings,
            images: ImageCache::default(),
        }
    }

    /// Full recompute of the displayed subset. Called on every
    /// selection change; there are no intermediate states.
    pub fn rebuild_view(&mut self) {
        self.view = FilteredView::from_catalog(&self.catalog, &self.filter);
        logf!("View: {:?} → {} of {} records", self.filter, self.view.len(), self.catalog.len());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("provinces")
            .resizable(false)
            .show(ctx, |ui| {
                components::province_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.separator();

            components::dish_list::draw(ui, self);
        });
    }
}
