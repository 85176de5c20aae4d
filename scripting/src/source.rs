use crate::{ActorId, Quat, Result, Vec3};

/// Read access to live actor state owned by a host (engine, database, test fixture).
///
/// Every method reads fresh state; implementations must not hand out cached values that
/// outlive a state change. An id that does not resolve to a live actor fails with
/// [`crate::ActorError::NotFound`].
pub trait ActorSource {
    /// Current world position.
    fn position(&self, actor: ActorId) -> Result<Vec3>;

    /// Current world rotation.
    fn rotation(&self, actor: ActorId) -> Result<Quat>;

    /// Current rotation relative to the actor's parent, or the world rotation when the
    /// actor has no parent.
    fn local_rotation(&self, actor: ActorId) -> Result<Quat>;

    /// World rotation captured when the actor was created.
    fn spawn_rotation(&self, actor: ActorId) -> Result<Quat>;
}

impl<T: ActorSource + ?Sized> ActorSource for &T {
    fn position(&self, actor: ActorId) -> Result<Vec3> {
        (**self).position(actor)
    }
    fn rotation(&self, actor: ActorId) -> Result<Quat> {
        (**self).rotation(actor)
    }
    fn local_rotation(&self, actor: ActorId) -> Result<Quat> {
        (**self).local_rotation(actor)
    }
    fn spawn_rotation(&self, actor: ActorId) -> Result<Quat> {
        (**self).spawn_rotation(actor)
    }
}
