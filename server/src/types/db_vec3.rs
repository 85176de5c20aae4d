use scripting::Vec3;

/// A 3D vector in world space (meters), or a packed `(pitch, yaw, roll)` triple in radians.
///
/// Semantics:
/// - Used for translations and Euler triples at the reducer boundary.
/// - This is a data type only; math/conversions live in `scripting`.
#[derive(spacetimedb::SpacetimeType, Debug, Default, Clone, Copy, PartialEq)]
pub struct DbVec3 {
    /// X axis (east-west), or pitch
    pub x: f32,
    /// Y axis (up-down), or yaw
    pub y: f32,
    /// Z axis (north-south), or roll
    pub z: f32,
}

impl DbVec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<DbVec3> for Vec3 {
    fn from(v: DbVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for DbVec3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
