mod reducers {
    pub mod actor;
    pub mod script;
    pub(crate) mod script_tick;
}
pub mod schema;
pub mod source;
pub mod types;
mod utils;

use crate::schema::*;
use reducers::script_tick::init_script_tick;
use spacetimedb::*;

#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    let settings = ScriptSettings::default();
    ctx.db.script_settings().id().delete(SCRIPT_SETTINGS_ID);
    init_script_tick(ctx, &settings);
    ctx.db.script_settings().insert(settings);
}
