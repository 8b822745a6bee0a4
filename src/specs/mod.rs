// src/specs/mod.rs
//! Page-specific parsing specs. Each spec knows where the ground truth lives
//! in one endpoint's markup and how to extract it tolerantly with the
//! `core::html` helpers; higher layers decide when to fetch, how to group
//! results into sheets, and how to export.

pub mod admissions;
