//! Spatial queries for actor scripts.
//!
//! Scripts run with a [`ScriptContext`] that names the current actor and reads live state
//! through an [`ActorSource`]. Every query takes an optional actor; `None` means the
//! current actor.
//!
//! - [`direction`]: `forward`/`backward`/`up`/`down`/`right`/`left` vectors.
//! - [`point`]: `point_ahead`, `point_behind`, ... (position + direction).
//! - [`orientation`]: rotation pass-throughs and yaw/pitch/roll.
//! - [`euler`]: the single quaternion → Euler conversion and its convention.
//! - [`behavior`]: stock scripts stepped once per host tick.

pub mod behavior;
pub mod constants;
pub mod context;
pub mod direction;
pub mod error;
pub mod euler;
pub mod orientation;
pub mod point;
pub mod snapshot;
pub mod source;
pub mod types;
pub mod utils;

pub use behavior::Behavior;
pub use constants::{DEFAULT_MAGNITUDE, GIMBAL_EPS, YAW_EPS};
pub use context::ScriptContext;
pub use error::{ActorError, Result};
pub use euler::{euler_to_quat, quat_to_euler};
pub use snapshot::{ActorSnapshot, SnapshotSource};
pub use source::ActorSource;
pub use types::{ActorId, Pose, Quat, Vec3};
pub use utils::{yaw_from_xz, yaw_rotation, yaw_toward};
