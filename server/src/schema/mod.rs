mod actor_table;
mod script_settings_table;
mod script_table;
mod transform_table;

pub use actor_table::*;
pub use script_settings_table::*;
pub use script_table::*;
pub use transform_table::*;
