// src/gui/components/mod.rs
pub mod dish_list;
pub mod province_panel;
