use crate::types::*;
use scripting::{ActorId, Pose};
use spacetimedb::{table, ReducerContext, Table};

/// World pose of every live actor, keyed by actor id.
#[table(name = transform_tbl, public)]
pub struct TransformRow {
    #[primary_key]
    pub actor_id: ActorId,

    pub translation: DbVec3,
    pub rotation: DbQuat,
}

impl TransformRow {
    pub fn find(ctx: &ReducerContext, actor_id: ActorId) -> Option<Self> {
        ctx.db.transform_tbl().actor_id().find(actor_id)
    }
    pub fn insert(ctx: &ReducerContext, actor_id: ActorId, pose: Pose) {
        ctx.db.transform_tbl().insert(Self {
            actor_id,
            translation: pose.translation.into(),
            rotation: pose.rotation.into(),
        });
    }
    pub fn update(ctx: &ReducerContext, actor_id: ActorId, pose: Pose) {
        ctx.db.transform_tbl().actor_id().update(Self {
            actor_id,
            translation: pose.translation.into(),
            rotation: pose.rotation.into(),
        });
    }
}
