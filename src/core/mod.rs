pub mod log;
pub mod planner;
pub mod scheduler;
pub mod week;
