mod activity_repo;
mod session_repo;

pub use activity_repo::SqliteActivityRepository;
pub use session_repo::SqliteSessionRepository;
