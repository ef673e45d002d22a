pub mod employee;
pub mod project;
pub mod schedule;
pub mod status;
