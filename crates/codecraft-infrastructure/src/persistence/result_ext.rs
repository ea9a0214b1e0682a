use codecraft_domain::shared::DomainError;

/// Extension trait shortening error conversion at repository and
/// infrastructure seams.
pub trait ResultExt<T, E> {
    /// Convert the error to `DomainError::Repository`.
    fn to_repo_err(self) -> Result<T, DomainError>;

    /// Convert the error to `DomainError::Infrastructure`.
    fn to_infra_err(self) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_repo_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Repository(e.to_string()))
    }

    fn to_infra_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(e.to_string()))
    }
}
