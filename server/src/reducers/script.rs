use crate::{schema::*, source::DbActorSource, types::DbBehavior};
use scripting::{ActorId, Result as QueryResult, ScriptContext};
use spacetimedb::{ReducerContext, Table};

/// Attach (or replace) the behavior stepped for `actor_id` by the script tick.
///
/// A behavior that targets another actor is only accepted if that actor is live and is
/// not the scripted actor itself.
#[spacetimedb::reducer]
pub fn attach_script(
    ctx: &ReducerContext,
    actor_id: ActorId,
    behavior: DbBehavior,
) -> Result<(), String> {
    if ActorRow::find(ctx, actor_id).is_none() {
        return Err(format!("Actor {actor_id} not found"));
    }

    match behavior.target() {
        Some(target) if target == actor_id => {
            return Err("An actor cannot target itself".into());
        }
        Some(target) if ActorRow::find(ctx, target).is_none() => {
            return Err(format!("Target actor {target} not found"));
        }
        _ => {}
    }

    let row = ScriptRow {
        actor_id,
        behavior,
        enabled: true,
    };
    if ScriptRow::find(ctx, actor_id).is_some() {
        row.update_from_self(ctx);
    } else {
        ctx.db.script_tbl().insert(row);
    }
    Ok(())
}

#[spacetimedb::reducer]
pub fn detach_script(ctx: &ReducerContext, actor_id: ActorId) -> Result<(), String> {
    if !ctx.db.script_tbl().actor_id().delete(actor_id) {
        return Err(format!("Actor {actor_id} has no script"));
    }
    Ok(())
}

/// Log a full spatial report for `actor_id` using the query API.
#[spacetimedb::reducer]
pub fn probe_actor(ctx: &ReducerContext, actor_id: ActorId) -> Result<(), String> {
    let source = DbActorSource::new(ctx);
    let script = ScriptContext::new(&source, actor_id);
    log_report(&script).map_err(|e| e.to_string())
}

fn log_report(script: &ScriptContext<'_, DbActorSource<'_>>) -> QueryResult<()> {
    let id = script.current();
    let pos = script.pos(None)?;
    let euler = script.euler(None)?;
    let local = script.local_euler(None)?;
    let spawn = scripting::quat_to_euler(&script.spawn_rot(None)?);
    let forward = script.forward(None, None)?;
    let ahead = script.point_ahead(1.0, None)?;

    log::info!("actor {id} pos=({:.3}, {:.3}, {:.3})", pos.x, pos.y, pos.z);
    log::info!(
        "actor {id} yaw={:.1}° pitch={:.1}° roll={:.1}° (local yaw={:.1}°, spawn yaw={:.1}°)",
        euler.y.to_degrees(),
        euler.x.to_degrees(),
        euler.z.to_degrees(),
        local.y.to_degrees(),
        spawn.y.to_degrees(),
    );
    log::info!(
        "actor {id} forward=({:.3}, {:.3}, {:.3}) ahead=({:.3}, {:.3}, {:.3})",
        forward.x,
        forward.y,
        forward.z,
        ahead.x,
        ahead.y,
        ahead.z,
    );
    Ok(())
}
