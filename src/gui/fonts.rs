// src/gui/fonts.rs
//
// egui's bundled fonts have no Thai glyphs, so pull in the first
// Thai-capable system font we can find. Best effort: when nothing
// matches, the UI still runs (Thai text renders as boxes).

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/truetype/tlwg/Garuda.ttf",
    "/System/Library/Fonts/Supplemental/Ayuthaya.ttf",
    r"C:\Windows\Fonts\tahoma.ttf",
    r"C:\Windows\Fonts\leelawui.ttf",
];

pub fn install_thai_fallback(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    for path in CANDIDATES {
        if let Ok(data) = std::fs::read(path) {
            fonts
                .font_data
                .insert(s!("thai_fallback"), FontData::from_owned(data).into());
            fonts
                .families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, s!("thai_fallback"));
            fonts
                .families
                .entry(FontFamily::Monospace)
                .or_default()
                .insert(0, s!("thai_fallback"));
            ctx.set_fonts(fonts);
            logf!("Fonts: Thai fallback from {}", path);
            return;
        }
    }

    logd!("Fonts: no Thai-capable system font found");
}
