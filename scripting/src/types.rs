/*!
Math aliases and the handle type shared by every query module.

This module contains no algorithms. Coordinates follow one convention across the crate:
- +Y is up.
- +Z is forward ("north" for an unrotated actor).
- +X is right ("east" for an unrotated actor).

All positions and directions are world space unless a function says otherwise.
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// 8byte opaque handle for an actor owned by the host.
///
/// The facade only forwards this to [`crate::ActorSource`] lookups; it never creates,
/// stores or validates one.
pub type ActorId = u64;

/// A rigid pose (translation + rotation) in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::zeros(), Quat::identity())
    }
}
