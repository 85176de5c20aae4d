//! Rotation pass-throughs and Euler angle queries.
//!
//! Every angle query runs [`quat_to_euler`] exactly once on one rotation and picks a
//! component, so `yaw`, `pitch` and `roll` of an unchanged actor always agree with
//! `euler`. See [`crate::euler`] for the sign conventions.

use crate::{ActorId, ActorSource, Quat, Result, ScriptContext, Vec3, quat_to_euler};

impl<S: ActorSource + ?Sized> ScriptContext<'_, S> {
    /// World position.
    pub fn pos(&self, actor: Option<ActorId>) -> Result<Vec3> {
        self.source().position(self.resolve(actor))
    }

    /// World rotation.
    pub fn rot(&self, actor: Option<ActorId>) -> Result<Quat> {
        self.source().rotation(self.resolve(actor))
    }

    /// Rotation relative to the parent (world rotation when parentless).
    pub fn local_rot(&self, actor: Option<ActorId>) -> Result<Quat> {
        self.source().local_rotation(self.resolve(actor))
    }

    /// World rotation captured at spawn.
    pub fn spawn_rot(&self, actor: Option<ActorId>) -> Result<Quat> {
        self.source().spawn_rotation(self.resolve(actor))
    }

    /// `(pitch, yaw, roll)` of the world rotation packed as `x`, `y`, `z`.
    pub fn euler(&self, actor: Option<ActorId>) -> Result<Vec3> {
        Ok(quat_to_euler(&self.rot(actor)?))
    }

    /// Heading in `(-π, π]`, clockwise from +Z seen from above.
    pub fn yaw(&self, actor: Option<ActorId>) -> Result<f32> {
        Ok(self.euler(actor)?.y)
    }

    /// Elevation in `[-π/2, π/2]`; positive is angled down.
    pub fn pitch(&self, actor: Option<ActorId>) -> Result<f32> {
        Ok(self.euler(actor)?.x)
    }

    /// Bank in `(-π, π]`; positive is tilted left.
    pub fn roll(&self, actor: Option<ActorId>) -> Result<f32> {
        Ok(self.euler(actor)?.z)
    }

    /// Same as [`Self::euler`] for the parent-relative rotation.
    pub fn local_euler(&self, actor: Option<ActorId>) -> Result<Vec3> {
        Ok(quat_to_euler(&self.local_rot(actor)?))
    }

    pub fn local_yaw(&self, actor: Option<ActorId>) -> Result<f32> {
        Ok(self.local_euler(actor)?.y)
    }

    pub fn local_pitch(&self, actor: Option<ActorId>) -> Result<f32> {
        Ok(self.local_euler(actor)?.x)
    }

    pub fn local_roll(&self, actor: Option<ActorId>) -> Result<f32> {
        Ok(self.local_euler(actor)?.z)
    }
}
