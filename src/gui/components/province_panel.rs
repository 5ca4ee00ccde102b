// src/gui/components/province_panel.rs
//
// Left panel: single-select province list with the "all" sentinel pinned
// to the top. Selecting an entry rebuilds the view immediately.

use eframe::egui;

use crate::catalog::ProvinceFilter;
use crate::consts::{ALL_PROVINCES, PROVINCE_HEADING};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(PROVINCE_HEADING);
    ui.separator();

    let mut changed = false;

    egui::ScrollArea::vertical()
        .id_salt("province_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            let all_selected = app.filter == ProvinceFilter::All;
            if ui.selectable_label(all_selected, ALL_PROVINCES).clicked() && !all_selected {
                app.filter = ProvinceFilter::All;
                changed = true;
            }

            for province in &app.provinces {
                let is_selected = matches!(&app.filter, ProvinceFilter::One(p) if p == province);
                if ui.selectable_label(is_selected, province).clicked() && !is_selected {
                    app.filter = ProvinceFilter::One(province.clone());
                    changed = true;
                }
            }
        });

    if changed {
        app.rebuild_view();
        logf!("UI: province filter → {:?}", app.filter);
    }
}
