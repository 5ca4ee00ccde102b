// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use dishcat::consts::DATA_DIR;
use dishcat::gui;

fn main() {
    // Optional single positional argument: the data directory.
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_DIR));

    let options = eframe::NativeOptions::default();

    if let Err(e) = gui::run(options, data_dir) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
