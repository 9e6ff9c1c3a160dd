//! Collaborator traits
//!
//! These traits define the interface between the animation logic and the
//! board it runs on: where time comes from, where randomness comes from,
//! and where pixels go.

pub mod clock;
pub mod plotter;
pub mod random;

pub use clock::{deadline_reached, Clock};
pub use plotter::PixelPlotter;
pub use random::{Random8, RandomSource};

#[cfg(feature = "embassy-time")]
pub use clock::EmbassyClock;
