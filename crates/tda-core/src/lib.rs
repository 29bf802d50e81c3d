//! tda-core - Shared error, geometry, and sort utilities for topological
//! data analysis on raster images.
//!
//! This crate provides the foundation used by the rest of the
//! workspace:
//!
//! - **Error handling** - `Error`/`Result`, shared by every downstream
//!   crate for shape-mismatch and ordering-violation failures.
//! - **Geometry** - `BBox`, a half-open axis-aligned bounding box.
//! - **Sort utilities** - stable argsort with carried permutations,
//!   integer min/max, sorted-dedup, and binary search on sorted floats.

pub mod error;
pub mod geometry;
pub mod sort;

pub use error::{Error, Result};
pub use geometry::{cols_from_rows, require_equal_len, BBox};
pub use sort::{argsort_f64, lower_bound_f64, min_max_i64, permute, sorted_dedup_f64};
