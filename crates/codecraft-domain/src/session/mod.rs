use async_trait::async_trait;

use crate::shared::{DomainError, UserId};

/// Resolves the authenticated user for the current request.
///
/// `None` means unauthenticated. Calendar callers treat that as a
/// policy outcome (empty calendar), never as an error.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Result<Option<UserId>, DomainError>;
}
