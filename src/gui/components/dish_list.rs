// src/gui/components/dish_list.rs
//
// Scrollable list of record panels. Empty catalog shows the empty-state
// message and nothing else; a record whose photo is missing or won't
// decode gets the placeholder label instead of an image.

use eframe::egui::{self, RichText};

use crate::consts::{
    IMAGE_MAX_WIDTH, IMAGE_NOT_FOUND, LABEL_INGREDIENTS, LABEL_PROVINCE, NO_DATA,
};
use crate::gui::app::App;
use crate::gui::images::ImageCache;
use crate::record::Record;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    for w in &app.warnings {
        ui.label(RichText::new(w).color(ui.visuals().warn_fg_color));
    }

    if app.catalog.is_empty() {
        ui.label(RichText::new(NO_DATA).color(ui.visuals().warn_fg_color));
        return;
    }

    let ctx = ui.ctx().clone();

    egui::ScrollArea::vertical()
        .id_salt("dish_list_scroll")
        .show(ui, |ui| {
            // Field-level borrows: the view/catalog stay shared while the
            // image cache is borrowed mutably, so nothing gets cloned here.
            for i in 0..app.view.len() {
                let Some(record) = app.view.record(&app.catalog, i) else { continue };
                dish_panel(ui, &ctx, &mut app.images, record);
                ui.separator();
            }
        });
}

fn dish_panel(ui: &mut egui::Ui, ctx: &egui::Context, images: &mut ImageCache, record: &Record) {
    ui.heading(&record.name);
    ui.label(format!("{}: {}", LABEL_PROVINCE, record.province));
    if !record.ingredients.is_empty() {
        ui.label(format!("{}: {}", LABEL_INGREDIENTS, record.ingredients));
    }
    if !record.description.is_empty() {
        ui.label(&record.description);
    }

    match images.texture_for(ctx, &record.image_path) {
        Some(texture) => {
            ui.add(egui::Image::new(&texture).max_width(IMAGE_MAX_WIDTH));
        }
        None => {
            ui.label(RichText::new(IMAGE_NOT_FOUND).weak());
        }
    }
}
