//! The ephemeral generation request.

use serde::{Deserialize, Serialize};

/// Inputs for a single recipe generation call.
///
/// Exists only for the duration of one generation; never persisted. The
/// caller is responsible for rejecting empty equipment/ingredient selections
/// before constructing one of these.
///
/// # Examples
///
/// ```
/// use muddler_core::GenerationRequest;
///
/// let request = GenerationRequest {
///     equipment_names: vec!["Shaker".to_string(), "Jigger".to_string()],
///     ingredient_names: vec!["Vodka".to_string(), "Lime Juice".to_string()],
///     mood_name: "Happy".to_string(),
///     mood_description: "Bright, celebratory drinks".to_string(),
///     mood_examples: "Mojito, Aperol Spritz".to_string(),
/// };
///
/// assert_eq!(request.equipment_names.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerationRequest {
    /// Names of the equipment the user owns
    pub equipment_names: Vec<String>,
    /// Names of the ingredients the user owns
    pub ingredient_names: Vec<String>,
    /// Mood display name
    pub mood_name: String,
    /// Mood description, used verbatim in the prompt
    pub mood_description: String,
    /// Example drinks for the mood, used verbatim in the prompt
    pub mood_examples: String,
}
