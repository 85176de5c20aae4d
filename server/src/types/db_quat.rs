use scripting::Quat;

/// A unit quaternion (w + xi + yj + zk), stored as four `f32` scalars.
///
/// Semantics:
/// - Represents an orientation in world space.
/// - Stored in `(x, y, z, w)` order to match common game engine conventions.
/// - This is a purely data/serialization type; math happens elsewhere.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbQuat {
    /// x component (imaginary i)
    pub x: f32,
    /// y component (imaginary j)
    pub y: f32,
    /// z component (imaginary k)
    pub z: f32,
    /// w component (real part)
    pub w: f32,
}

impl From<DbQuat> for Quat {
    fn from(q: DbQuat) -> Self {
        // Renormalizes on decode.
        Quat::from_quaternion(nalgebra::Quaternion::new(q.w, q.x, q.y, q.z))
    }
}

impl From<Quat> for DbQuat {
    fn from(uq: Quat) -> Self {
        let q = uq.into_inner();
        DbQuat {
            x: q.i,
            y: q.j,
            z: q.k,
            w: q.w,
        }
    }
}
