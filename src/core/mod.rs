// src/core/mod.rs

pub mod grid;
pub mod html;
pub mod sanitize;
pub mod wrap;

pub use grid::{Cell, Grid};
