/// Magnitude used by the direction queries when the caller passes `None`.
///
/// Direction queries return unit vectors by default, so `forward(None, ..)` is the
/// actor's facing direction and `point_ahead(d, ..)` is `d` meters along it.
pub const DEFAULT_MAGNITUDE: f32 = 1.0;

/// Tolerance on `|sin(pitch)|` before the Euler decomposition is treated as gimbal locked.
///
/// At the lock roll and yaw rotate about the same world axis, so roll is pinned to 0
/// and yaw carries the whole rotation.
pub const GIMBAL_EPS: f32 = 1.0e-6;

/// Local forward axis (+Z, "north" when unrotated).
pub const LOCAL_FORWARD: [f32; 3] = [0.0, 0.0, 1.0];

/// Local up axis (+Y).
pub const LOCAL_UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Local right axis (+X, "east" when unrotated).
pub const LOCAL_RIGHT: [f32; 3] = [1.0, 0.0, 0.0];

/// Minimum squared planar distance (m²) before a facing direction is derived from it.
pub const YAW_EPS: f32 = 1.0e-6;
