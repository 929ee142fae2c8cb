//! Domain records served by the people table.

pub mod person;
