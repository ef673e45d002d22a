pub mod employee;
pub mod project;
pub mod schedule_entry;
pub mod status_code;
