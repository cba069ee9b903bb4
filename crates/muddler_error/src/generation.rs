//! Generation backend error types.

/// The outbound generation call failed.
///
/// Carries the backend's diagnostic message verbatim so callers can log the
/// cause. The call is never retried at this layer.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation unavailable: {} at line {} in {}", message, line, file)]
pub struct GenerationUnavailable {
    /// Diagnostic message from the backend (network, timeout, or API error)
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationUnavailable {
    /// Create a new GenerationUnavailable with the given message at the
    /// current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use muddler_error::GenerationUnavailable;
    ///
    /// let err = GenerationUnavailable::new("request timed out after 30s");
    /// assert!(err.message.contains("timed out"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
