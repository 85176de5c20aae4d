use crate::{Quat, Vec3, constants::YAW_EPS};
use nalgebra::Vector2;

/// Heading of a planar (XZ) direction in the crate's yaw convention.
///
/// Returns `None` when the direction is too short to define a heading.
pub fn yaw_from_xz(xz: Vector2<f32>) -> Option<f32> {
    if xz.norm_squared() > YAW_EPS {
        return Some(xz.x.atan2(xz.y));
    }

    None
}

/// Heading from `from` toward `to`, ignoring height.
pub fn yaw_toward(from: Vec3, to: Vec3) -> Option<f32> {
    yaw_from_xz(Vector2::new(to.x - from.x, to.z - from.z))
}

/// Yaw-only rotation about world up.
#[inline]
pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_axis_angle(&Vec3::y_axis(), yaw)
}
