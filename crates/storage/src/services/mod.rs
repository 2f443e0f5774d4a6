pub mod schedule;
pub mod scoring;
