mod contribution_queries;

pub use contribution_queries::ContributionQueries;
