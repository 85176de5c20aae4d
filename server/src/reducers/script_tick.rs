//! Scheduled script tick.
//!
//! Once per interval every enabled `ScriptRow` is stepped with its actor as the current
//! actor, and the resulting pose is committed before the next script runs. Scripts that
//! read another actor therefore see poses already updated this tick when that actor's
//! script ran first (ascending actor id).
//!
//! A script whose lookups fail (its actor or its target is gone) is disabled and logged;
//! the remaining scripts keep running.

use crate::{
    schema::*,
    source::DbActorSource,
    types::DbBehavior,
    utils::{delta_time, interval},
};
use scripting::{Behavior, ScriptContext};
use spacetimedb::{reducer, ReducerContext, ScheduleAt, Table, Timestamp};

#[spacetimedb::table(name = script_tick_timer, scheduled(script_tick_reducer))]
pub struct ScriptTickTimer {
    #[primary_key]
    #[auto_inc]
    pub scheduled_id: u64,
    pub scheduled_at: ScheduleAt,

    // Custom data for scheduled reducer:
    pub last_tick: Timestamp,
}

pub fn init_script_tick(ctx: &ReducerContext, settings: &ScriptSettings) {
    ctx.db.script_tick_timer().scheduled_id().delete(1);
    ctx.db.script_tick_timer().insert(ScriptTickTimer {
        scheduled_id: 1,
        scheduled_at: interval(settings.tick_interval_micros),
        last_tick: ctx.timestamp,
    });
    log::info!(
        "init script_tick every {}us",
        settings.tick_interval_micros
    );
}

/// The `enabled` index does not order by actor, so the tick sorts explicitly.
fn sort_for_tick(scripts: &mut [ScriptRow]) {
    scripts.sort_unstable_by_key(|script| script.actor_id);
}

#[reducer]
fn script_tick_reducer(ctx: &ReducerContext, mut timer: ScriptTickTimer) -> Result<(), String> {
    if ctx.sender != ctx.identity() {
        log::error!("`script_tick_reducer` may not be invoked by clients.");
        return Err("`script_tick_reducer` may not be invoked by clients.".into());
    }

    let settings = ScriptSettings::get(ctx);
    let dt = delta_time(ctx.timestamp, timer.last_tick)
        .map(|dt| dt.min(settings.max_tick_dt_secs))
        .unwrap_or(0.0);

    // Collect first: stepping writes back into `script_tbl`.
    let mut scripts: Vec<ScriptRow> = ctx.db.script_tbl().enabled().filter(true).collect();
    sort_for_tick(&mut scripts);
    let source = DbActorSource::new(ctx);

    for mut script in scripts {
        let mut behavior = Behavior::from(script.behavior);
        let context = ScriptContext::new(&source, script.actor_id);

        match behavior.step(&context, dt) {
            Ok(pose) => {
                TransformRow::update(ctx, script.actor_id, pose);

                let stored = DbBehavior::from(behavior);
                if stored != script.behavior {
                    script.behavior = stored;
                    script.update_from_self(ctx);
                }
            }
            Err(err) => {
                log::warn!("Disabling script for actor {}: {}", script.actor_id, err);
                script.enabled = false;
                script.update_from_self(ctx);
            }
        }
    }

    timer.last_tick = ctx.timestamp;
    ctx.db.script_tick_timer().scheduled_id().update(timer);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(actor_id: u64) -> ScriptRow {
        ScriptRow {
            actor_id,
            behavior: DbBehavior::Spin(1.0),
            enabled: true,
        }
    }

    #[test]
    fn scripts_run_in_actor_order() {
        let mut scripts = vec![script(9), script(2), script(5), script(1)];
        sort_for_tick(&mut scripts);

        let order: Vec<u64> = scripts.iter().map(|s| s.actor_id).collect();
        assert_eq!(order, vec![1, 2, 5, 9]);
    }
}
