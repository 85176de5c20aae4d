use scripting::{ActorId, Behavior};

/// Orbit parameters, see [`Behavior::Orbit`].
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbOrbit {
    pub target: ActorId,
    pub radius: f32,
    pub angular_speed_rad: f32,
    /// Angle travelled so far (radians). Written back after every successful tick.
    pub phase: f32,
}

/// Follow parameters, see [`Behavior::Follow`].
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbFollow {
    pub target: ActorId,
    pub distance: f32,
}

/// Storage form of a scripted behavior.
///
/// Semantics:
/// - `Advance(speed_mps)`: walk along the facing direction.
/// - `Spin(yaw_rate_rad)`: turn in place about world up.
/// - `Orbit(..)`: circle another actor while facing it.
/// - `Follow(..)`: trail behind another actor with its heading.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub enum DbBehavior {
    Advance(f32),
    Spin(f32),
    Orbit(DbOrbit),
    Follow(DbFollow),
}

impl From<DbBehavior> for Behavior {
    fn from(b: DbBehavior) -> Self {
        match b {
            DbBehavior::Advance(speed_mps) => Behavior::Advance { speed_mps },
            DbBehavior::Spin(yaw_rate_rad) => Behavior::Spin { yaw_rate_rad },
            DbBehavior::Orbit(o) => Behavior::Orbit {
                target: o.target,
                radius: o.radius,
                angular_speed_rad: o.angular_speed_rad,
                phase: o.phase,
            },
            DbBehavior::Follow(f) => Behavior::Follow {
                target: f.target,
                distance: f.distance,
            },
        }
    }
}

impl From<Behavior> for DbBehavior {
    fn from(b: Behavior) -> Self {
        match b {
            Behavior::Advance { speed_mps } => DbBehavior::Advance(speed_mps),
            Behavior::Spin { yaw_rate_rad } => DbBehavior::Spin(yaw_rate_rad),
            Behavior::Orbit {
                target,
                radius,
                angular_speed_rad,
                phase,
            } => DbBehavior::Orbit(DbOrbit {
                target,
                radius,
                angular_speed_rad,
                phase,
            }),
            Behavior::Follow { target, distance } => {
                DbBehavior::Follow(DbFollow { target, distance })
            }
        }
    }
}

impl DbBehavior {
    /// The other actor this behavior reads, if any.
    pub fn target(&self) -> Option<ActorId> {
        match self {
            DbBehavior::Orbit(o) => Some(o.target),
            DbBehavior::Follow(f) => Some(f.target),
            DbBehavior::Advance(_) | DbBehavior::Spin(_) => None,
        }
    }
}
