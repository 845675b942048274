// Service module exports

pub mod calendar;
pub mod layout;
pub mod settings;
pub mod task;
