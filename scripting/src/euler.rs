/*!
The one quaternion → Euler conversion used by every angle query.

# Convention
A rotation is decomposed as `Ry(yaw) * Rx(pitch) * Rz(roll)`: yaw about world up
first, then pitch about the yawed lateral axis, then roll about the resulting forward
axis. The triple is returned packed in a [`Vec3`]:

- `x` = pitch, in `[-π/2, π/2]`. Positive tips the forward axis **down**.
- `y` = yaw, in `(-π, π]`. 0 faces +Z ("north"); positive turns clockwise seen from
  above, so `+π/2` faces +X ("east").
- `z` = roll, in `(-π, π]`. Positive banks toward the **left** (the right side rises).

This is not nalgebra's `euler_angles()` (which is roll-pitch-yaw about X, Y, Z); do not
mix the two.
*/

use std::f32::consts::TAU;

use crate::{Quat, Vec3, constants::GIMBAL_EPS};

/// Decomposes `q` into `(pitch, yaw, roll)` packed as `x`, `y`, `z`.
///
/// Near gimbal lock (`|sin(pitch)| >= 1 - GIMBAL_EPS`) roll is pinned to 0 and yaw
/// absorbs the whole rotation about the vertical axis.
pub fn quat_to_euler(q: &Quat) -> Vec3 {
    let rotation = q.to_rotation_matrix();
    let m = rotation.matrix();

    // m[(1, 2)] = -sin(pitch) for Ry * Rx * Rz.
    let sin_pitch = (-m[(1, 2)]).clamp(-1.0, 1.0);
    let pitch = sin_pitch.asin();

    let (yaw, roll) = if sin_pitch.abs() >= 1.0 - GIMBAL_EPS {
        ((-m[(2, 0)]).atan2(m[(0, 0)]), 0.0)
    } else {
        (m[(0, 2)].atan2(m[(2, 2)]), m[(1, 0)].atan2(m[(1, 1)]))
    };

    Vec3::new(pitch, wrap_half_open(yaw), wrap_half_open(roll))
}

/// Builds the rotation for a `(pitch, yaw, roll)` triple in the same convention as
/// [`quat_to_euler`].
pub fn euler_to_quat(euler: &Vec3) -> Quat {
    Quat::from_axis_angle(&Vec3::y_axis(), euler.y)
        * Quat::from_axis_angle(&Vec3::x_axis(), euler.x)
        * Quat::from_axis_angle(&Vec3::z_axis(), euler.z)
}

/// Maps `atan2` output from `[-π, π]` onto `(-π, π]`.
#[inline]
fn wrap_half_open(angle: f32) -> f32 {
    if angle <= -std::f32::consts::PI {
        angle + TAU
    } else {
        angle
    }
}
