//! tda - Topological data analysis on greyscale raster images.
//!
//! Ties together the workspace's four stages:
//!
//! - [`tda_label`] - connected-component labelling of a thresholded mask.
//! - [`tda_persist`] - persistence trajectories across a threshold sequence.
//! - [`tda_landscape`] - persistence landscapes over birth/death pairs.
//! - [`tda_peel`] - onion-peeling of convex hulls over a point set.
//!
//! # Example
//!
//! ```
//! use tda::{Labeller, Landscape};
//!
//! let mask = vec![
//!     0, 0, 0, 0,
//!     0, 1, 1, 0,
//!     0, 1, 1, 0,
//!     0, 0, 0, 0,
//! ];
//! let labeller = Labeller::new(mask, 4, None).unwrap();
//! assert_eq!(labeller.num_components(), 2);
//!
//! let ls = Landscape::new(vec![3.0, 4.0, 5.0], vec![9.0, 8.0, 7.0]).unwrap();
//! assert_eq!(ls.eval(6.0, &[0]), vec![3.0]);
//! ```

pub use tda_core::{BBox, Error, Result};
pub use tda_label::{LabelError, LabelResult, Labeller};
pub use tda_landscape::{Landscape, Stat};
pub use tda_peel::{ConvexPeel, PeelError, PeelResult};
pub use tda_persist::{PersistError, PersistResult, Persistence, Pstate, Trajectory};
