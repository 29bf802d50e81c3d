//! tda-peel - Onion-peeling of convex hulls over a 2-D point set, with
//! area/perimeter/centroid statistics at each survival fraction.

pub mod error;
pub mod peel;

pub use error::{PeelError, PeelResult};
pub use peel::ConvexPeel;
pub use tda_landscape::Stat;
