use crate::types::*;
use scripting::ActorId;
use spacetimedb::{table, ReducerContext};

/// Shared table for all live actors.
///
/// Pose lives in [`super::TransformRow`]; this row carries what is fixed at spawn plus the
/// single parent link used to derive local rotation.
#[table(name = actor_tbl, public)]
pub struct ActorRow {
    #[auto_inc]
    #[primary_key]
    pub id: ActorId,

    /// Parent actor for local-space queries. `None` means local == world.
    pub parent: Option<ActorId>,

    /// World rotation captured at spawn. Never updated afterwards.
    pub spawn_rotation: DbQuat,
}

impl ActorRow {
    pub fn find(ctx: &ReducerContext, id: ActorId) -> Option<Self> {
        ctx.db.actor_tbl().id().find(id)
    }
}
