//! tda-landscape - Persistence landscapes and their area/perimeter/
//! centroid statistics.

pub mod landscape;

pub use landscape::{Landscape, Stat};
pub use tda_core::{Error, Result};
