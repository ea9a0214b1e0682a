mod repository;
mod types;

#[cfg(test)]
mod types_test;

pub use repository::ActivityRepository;
pub use types::{ActivityRecord, ActivitySource, DailyCount};
