//! tda-persist - Object persistence trajectories across an increasing
//! sequence of image intensity thresholds.

pub mod error;
pub mod persistence;

pub use error::{PersistError, PersistResult};
pub use persistence::{Persistence, Pstate, Trajectory};
