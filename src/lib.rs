// Task Calendar Library
// Scheduling engine behind the task manager's list and calendar views

pub mod models;
pub mod services;
pub mod utils;
