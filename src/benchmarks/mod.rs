pub mod memory_tracker;
pub mod runner;
pub mod suite;
