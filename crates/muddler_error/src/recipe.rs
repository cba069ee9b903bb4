//! Recipe parse error types.

/// Specific reasons a generation response could not be turned into a recipe.
///
/// Each variant stays distinguishable so callers can log *why* a response was
/// unusable, not just *that* it was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RecipeParseErrorKind {
    /// Response content was not valid JSON
    #[display("Malformed JSON in response: {}", _0)]
    MalformedJson(String),
    /// The `name` field is absent, not a string, or empty
    #[display("Recipe 'name' is missing, not a string, or empty")]
    MissingName,
    /// The `ingredients` field is absent, not an array, or empty
    #[display("Recipe 'ingredients' is missing, not an array, or empty")]
    MissingIngredients,
    /// The `steps` field is absent, not an array, or empty
    #[display("Recipe 'steps' is missing, not an array, or empty")]
    MissingSteps,
}

/// The backend responded but the content could not be parsed into a recipe.
///
/// # Examples
///
/// ```
/// use muddler_error::{RecipeParseError, RecipeParseErrorKind};
///
/// let err = RecipeParseError::new(RecipeParseErrorKind::MissingName);
/// assert!(format!("{}", err).contains("name"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Recipe Parse Error: {} at line {} in {}", kind, line, file)]
pub struct RecipeParseError {
    /// The specific error condition
    pub kind: RecipeParseErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RecipeParseError {
    /// Create a new RecipeParseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RecipeParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<serde_json::Error> for RecipeParseError {
    fn from(err: serde_json::Error) -> Self {
        RecipeParseError::new(RecipeParseErrorKind::MalformedJson(err.to_string()))
    }
}
