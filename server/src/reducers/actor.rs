//! Actor lifecycle and pose reducers.
//!
//! These reducers are the only writers of `actor_tbl` and the only writers of
//! `transform_tbl` besides the script tick.
//!
//! Behavior
//! - Euler triples at this boundary are `(pitch, yaw, roll)` packed as `x`, `y`, `z`, in
//!   radians, using the same convention as the scripting queries.
//! - Parent links never form a cycle; `set_parent` walks the chain before linking.
//! - Despawning a parent detaches its children; their world pose is unchanged.

use crate::{schema::*, types::*};
use scripting::{euler_to_quat, ActorId, Pose};
use spacetimedb::{ReducerContext, Table};

#[spacetimedb::reducer]
pub fn spawn_actor(
    ctx: &ReducerContext,
    translation: DbVec3,
    euler: DbVec3,
    parent: Option<ActorId>,
) -> Result<(), String> {
    if let Some(parent) = parent {
        if ActorRow::find(ctx, parent).is_none() {
            return Err(format!("Parent actor {parent} not found"));
        }
    }

    let rotation = euler_to_quat(&euler.into());
    let actor = ctx.db.actor_tbl().insert(ActorRow {
        id: 0,
        parent,
        spawn_rotation: rotation.into(),
    });
    TransformRow::insert(ctx, actor.id, Pose::new(translation.into(), rotation));

    log::info!("Spawned actor {} (parent {:?})", actor.id, parent);
    Ok(())
}

#[spacetimedb::reducer]
pub fn despawn_actor(ctx: &ReducerContext, actor_id: ActorId) -> Result<(), String> {
    if !ctx.db.actor_tbl().id().delete(actor_id) {
        return Err(format!("Actor {actor_id} not found"));
    }
    ctx.db.transform_tbl().actor_id().delete(actor_id);
    ctx.db.script_tbl().actor_id().delete(actor_id);

    let children: Vec<ActorRow> = ctx
        .db
        .actor_tbl()
        .iter()
        .filter(|row| row.parent == Some(actor_id))
        .collect();
    for child in children {
        log::info!("Detaching actor {} from despawned parent {}", child.id, actor_id);
        ctx.db.actor_tbl().id().update(ActorRow {
            parent: None,
            ..child
        });
    }

    log::info!("Despawned actor {actor_id}");
    Ok(())
}

#[spacetimedb::reducer]
pub fn set_pose(
    ctx: &ReducerContext,
    actor_id: ActorId,
    translation: DbVec3,
    euler: DbVec3,
) -> Result<(), String> {
    if TransformRow::find(ctx, actor_id).is_none() {
        return Err(format!("Actor {actor_id} not found"));
    }

    let pose = Pose::new(translation.into(), euler_to_quat(&euler.into()));
    TransformRow::update(ctx, actor_id, pose);
    Ok(())
}

#[spacetimedb::reducer]
pub fn set_parent(
    ctx: &ReducerContext,
    actor_id: ActorId,
    parent: Option<ActorId>,
) -> Result<(), String> {
    let Some(actor) = ActorRow::find(ctx, actor_id) else {
        return Err(format!("Actor {actor_id} not found"));
    };

    if let Some(parent) = parent {
        if creates_cycle(ctx, actor_id, parent)? {
            return Err(format!(
                "Actor {parent} cannot parent {actor_id}: parent chain would loop"
            ));
        }
    }

    ctx.db.actor_tbl().id().update(ActorRow { parent, ..actor });
    Ok(())
}

/// Walks up from `parent` and reports whether `actor_id` is reached.
///
/// Fails if `parent` (or any ancestor) does not resolve.
fn creates_cycle(ctx: &ReducerContext, actor_id: ActorId, parent: ActorId) -> Result<bool, String> {
    let mut cursor = Some(parent);
    while let Some(id) = cursor {
        if id == actor_id {
            return Ok(true);
        }
        let Some(row) = ActorRow::find(ctx, id) else {
            return Err(format!("Parent actor {id} not found"));
        };
        cursor = row.parent;
    }
    Ok(false)
}
