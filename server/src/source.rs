//! [`ActorSource`] over the module's tables.
//!
//! Every lookup is a primary-key seek against the live tables, so a script running inside
//! a reducer sees the writes made earlier in the same reducer.

use crate::schema::{ActorRow, TransformRow};
use scripting::{ActorError, ActorId, ActorSource, Quat, Result, Vec3};
use spacetimedb::ReducerContext;

pub struct DbActorSource<'a> {
    ctx: &'a ReducerContext,
}

impl<'a> DbActorSource<'a> {
    pub fn new(ctx: &'a ReducerContext) -> Self {
        Self { ctx }
    }

    fn transform(&self, actor: ActorId) -> Result<TransformRow> {
        TransformRow::find(self.ctx, actor).ok_or(ActorError::NotFound(actor))
    }

    fn actor(&self, actor: ActorId) -> Result<ActorRow> {
        ActorRow::find(self.ctx, actor).ok_or(ActorError::NotFound(actor))
    }
}

impl ActorSource for DbActorSource<'_> {
    fn position(&self, actor: ActorId) -> Result<Vec3> {
        Ok(self.transform(actor)?.translation.into())
    }

    fn rotation(&self, actor: ActorId) -> Result<Quat> {
        Ok(self.transform(actor)?.rotation.into())
    }

    fn local_rotation(&self, actor: ActorId) -> Result<Quat> {
        let rotation = self.rotation(actor)?;
        match self.actor(actor)?.parent {
            Some(parent) => Ok(self.rotation(parent)?.inverse() * rotation),
            None => Ok(rotation),
        }
    }

    fn spawn_rotation(&self, actor: ActorId) -> Result<Quat> {
        Ok(self.actor(actor)?.spawn_rotation.into())
    }
}
