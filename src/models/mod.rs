pub mod activity;
pub mod schedule;
