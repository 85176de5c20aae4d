use spacetimedb::*;

/// Script tick settings.
///
/// This is intended to be a single-row table (`id = 1`) seeded by `init`.
///
/// Notes
/// - Values are expressed in microseconds and seconds.
/// - The tick interval is read when the timer is (re)scheduled, not every tick.
#[table(name = script_settings, public)]
pub struct ScriptSettings {
    /// Unique id (primary key). Use a single row with `id = 1`.
    #[primary_key]
    pub id: u32,

    /// Interval between script ticks (microseconds).
    pub tick_interval_micros: i64,

    /// Upper bound on the delta time handed to behaviors (seconds).
    /// Keeps a stalled module from teleporting actors when it resumes.
    pub max_tick_dt_secs: f32,
}

pub const SCRIPT_SETTINGS_ID: u32 = 1;

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            id: SCRIPT_SETTINGS_ID,
            tick_interval_micros: 100_000,
            max_tick_dt_secs: 0.25,
        }
    }
}

impl ScriptSettings {
    /// The settings row, or defaults when it has not been seeded.
    pub fn get(ctx: &ReducerContext) -> Self {
        ctx.db
            .script_settings()
            .id()
            .find(SCRIPT_SETTINGS_ID)
            .unwrap_or_default()
    }
}
