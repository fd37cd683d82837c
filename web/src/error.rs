use thiserror::Error;

/// Mistakes in how widgets are assembled, as opposed to anything a user can do.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WiringError {
    #[error("{hook} must be used within a {provider}")]
    MissingProvider {
        hook: &'static str,
        provider: &'static str,
    },
}

/// Turns an absent context into a [`WiringError::MissingProvider`].
pub(crate) fn require_provider<T>(
    context: Option<T>,
    hook: &'static str,
    provider: &'static str,
) -> Result<T, WiringError> {
    context.ok_or(WiringError::MissingProvider { hook, provider })
}
