pub mod employee;
pub mod reference;
pub mod schedule;
pub mod stats;
