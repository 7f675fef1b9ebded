//! Unit enumerations and cross-kind operators for the four quantity kinds.

pub mod area;
pub mod length;
pub mod velocity;
pub mod volume;

pub use area::{Area, AreaSystem, AreaUnit};
pub use length::{Length, LengthSystem, LengthUnit};
pub use velocity::{Velocity, VelocitySystem, VelocityUnit};
pub use volume::{Volume, VolumeSystem, VolumeUnit};
