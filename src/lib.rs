// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod cli;
pub mod consts;
pub mod csv;
pub mod gui;
pub mod load;
pub mod record;
