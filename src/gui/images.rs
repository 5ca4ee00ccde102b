// src/gui/images.rs
//
// Synchronous per-path texture cache for the dish photos. A path is
// decoded at most once per run; both outcomes are cached, so a corrupt
// file costs one decode attempt and then renders the placeholder for
// free. Decode errors never leave this module.

use std::collections::HashMap;
use std::path::Path;

use eframe::egui::{self, TextureHandle, TextureOptions};
use image::GenericImageView;

/// Bound on the longest texture edge. Catalog photos can be camera-sized;
/// uploading those verbatim wastes GPU memory for no visible gain.
const MAX_EDGE: u32 = 1024;

#[derive(Default)]
pub struct ImageCache {
    // None = load was attempted and failed (or path missing/empty)
    textures: HashMap<String, Option<TextureHandle>>,
}

impl ImageCache {
    /// Texture for `path`, loading and caching it on first request.
    /// None means: empty path, nonexistent file, or undecodable image.
    /// The caller renders the placeholder in every one of those cases.
    pub fn texture_for(&mut self, ctx: &egui::Context, path: &str) -> Option<TextureHandle> {
        if path.is_empty() {
            return None;
        }
        if let Some(cached) = self.textures.get(path) {
            return cached.clone();
        }

        let loaded = load_texture(ctx, path);
        if loaded.is_none() {
            logd!("Images: no texture for {:?}", path);
        }
        self.textures.insert(s!(path), loaded.clone());
        loaded
    }
}

fn load_texture(ctx: &egui::Context, path: &str) -> Option<TextureHandle> {
    if !Path::new(path).is_file() {
        return None;
    }

    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            logd!("Images: decode failed for {} ({})", path, e);
            return None;
        }
    };

    let img = if img.width() > MAX_EDGE || img.height() > MAX_EDGE {
        img.thumbnail(MAX_EDGE, MAX_EDGE)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Some(ctx.load_texture(path, color, TextureOptions::default()))
}
