pub mod employee;
pub mod health;
pub mod reference;
pub mod stats;
