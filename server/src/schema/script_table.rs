use crate::types::*;
use scripting::ActorId;
use spacetimedb::{table, ReducerContext};

/// A behavior attached to an actor and stepped by the script tick.
///
/// At most one script per actor. Scripts whose lookups fail are disabled rather than
/// deleted, so the failure stays visible to subscribers.
#[table(name = script_tbl, public)]
pub struct ScriptRow {
    #[primary_key]
    pub actor_id: ActorId,

    pub behavior: DbBehavior,

    #[index(btree)]
    pub enabled: bool,
}

impl ScriptRow {
    pub fn find(ctx: &ReducerContext, actor_id: ActorId) -> Option<Self> {
        ctx.db.script_tbl().actor_id().find(actor_id)
    }
    /// Updates from given self, caller should have updated the state with the latest values.
    pub fn update_from_self(self, ctx: &ReducerContext) {
        ctx.db.script_tbl().actor_id().update(self);
    }
}
