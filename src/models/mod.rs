// Module exports for models

pub mod recurrence;
pub mod settings;
pub mod task;
