//! World-space direction vectors relative to an actor's facing.
//!
//! Each query rotates a fixed local axis, scaled by `mag`, by the actor's world
//! rotation (`rotation * axis`, never the inverse). `mag` defaults to
//! [`DEFAULT_MAGNITUDE`]; a negative `mag` flips the direction.

use crate::{
    ActorId, ActorSource, Result, ScriptContext, Vec3,
    constants::{DEFAULT_MAGNITUDE, LOCAL_FORWARD, LOCAL_RIGHT, LOCAL_UP},
};

impl<S: ActorSource + ?Sized> ScriptContext<'_, S> {
    /// Rotates `axis * mag` into world space using the actor's rotation.
    fn along(&self, axis: [f32; 3], mag: f32, actor: Option<ActorId>) -> Result<Vec3> {
        let rotation = self.source().rotation(self.resolve(actor))?;
        Ok(rotation * (Vec3::from(axis) * mag))
    }

    /// Local `(0, 0, +mag)` in world space.
    pub fn forward(&self, mag: Option<f32>, actor: Option<ActorId>) -> Result<Vec3> {
        self.along(LOCAL_FORWARD, mag.unwrap_or(DEFAULT_MAGNITUDE), actor)
    }

    /// Local `(0, 0, -mag)` in world space.
    pub fn backward(&self, mag: Option<f32>, actor: Option<ActorId>) -> Result<Vec3> {
        self.along(LOCAL_FORWARD, -mag.unwrap_or(DEFAULT_MAGNITUDE), actor)
    }

    /// Local `(0, +mag, 0)` in world space.
    pub fn up(&self, mag: Option<f32>, actor: Option<ActorId>) -> Result<Vec3> {
        self.along(LOCAL_UP, mag.unwrap_or(DEFAULT_MAGNITUDE), actor)
    }

    /// Local `(0, -mag, 0)` in world space.
    pub fn down(&self, mag: Option<f32>, actor: Option<ActorId>) -> Result<Vec3> {
        self.along(LOCAL_UP, -mag.unwrap_or(DEFAULT_MAGNITUDE), actor)
    }

    /// Local `(+mag, 0, 0)` in world space.
    pub fn right(&self, mag: Option<f32>, actor: Option<ActorId>) -> Result<Vec3> {
        self.along(LOCAL_RIGHT, mag.unwrap_or(DEFAULT_MAGNITUDE), actor)
    }

    /// Local `(-mag, 0, 0)` in world space.
    pub fn left(&self, mag: Option<f32>, actor: Option<ActorId>) -> Result<Vec3> {
        self.along(LOCAL_RIGHT, -mag.unwrap_or(DEFAULT_MAGNITUDE), actor)
    }
}
