// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod activity;
pub mod calendar;
pub mod session;
pub mod shared;

// Re-exports for convenience
pub use shared::{DomainError, UserId};
