//! tda-label - Connected-component labelling for binary rasters.
//!
//! Run-based, two-scan labelling with union-find: a provisional-label
//! pass over horizontal runs, a resolve pass through the union-find,
//! and a dense-renumbering pass that preserves first-occurrence order.

pub mod error;
pub mod labeller;

pub use error::{LabelError, LabelResult};
pub use labeller::Labeller;
