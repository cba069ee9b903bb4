//! Top-level error wrapper types.

#[cfg(feature = "database")]
use crate::DatabaseError;
use crate::{ConfigError, GenerationUnavailable, RecipeParseError};

/// This is the foundation error enum for the Muddler workspace.
///
/// # Examples
///
/// ```
/// use muddler_error::{MuddlerError, GenerationUnavailable};
///
/// let gen_err = GenerationUnavailable::new("Connection failed");
/// let err: MuddlerError = gen_err.into();
/// assert!(format!("{}", err).contains("Generation unavailable"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MuddlerErrorKind {
    /// Outbound generation call failed
    #[from(GenerationUnavailable)]
    Generation(GenerationUnavailable),
    /// Response could not be parsed into a recipe
    #[from(RecipeParseError)]
    RecipeParse(RecipeParseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Muddler error with kind discrimination.
///
/// # Examples
///
/// ```
/// use muddler_error::{MuddlerResult, ConfigError};
///
/// fn might_fail() -> MuddlerResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Muddler Error: {}", _0)]
pub struct MuddlerError(Box<MuddlerErrorKind>);

impl MuddlerError {
    /// Create a new error from a kind.
    pub fn new(kind: MuddlerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MuddlerErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MuddlerErrorKind
impl<T> From<T> for MuddlerError
where
    T: Into<MuddlerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Muddler operations.
///
/// # Examples
///
/// ```
/// use muddler_error::{MuddlerResult, GenerationUnavailable};
///
/// fn fetch_data() -> MuddlerResult<String> {
///     Err(GenerationUnavailable::new("404 Not Found"))?
/// }
/// ```
pub type MuddlerResult<T> = std::result::Result<T, MuddlerError>;
