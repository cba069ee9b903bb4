//! Immutable catalog entry types.
//!
//! Catalog records are created only by seeding and are never mutated by the
//! generation pipeline; they are read-only inputs to prompt construction and
//! name reconciliation.

use serde::{Deserialize, Serialize};

/// Closed set of equipment subcategories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    /// Shakers and mixing tins
    Shaking,
    /// Bar spoons and stirring glasses
    Stirring,
    /// Jiggers and measures
    Measuring,
    /// Strainers and fine sieves
    Straining,
    /// Serving glassware
    Glassware,
    /// Muddlers, peelers, and garnish tools
    Preparation,
}

/// Closed set of ingredient subcategories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Base spirits (vodka, gin, rum, ...)
    Spirit,
    /// Liqueurs and fortified wines
    Liqueur,
    /// Carbonated and still mixers
    Mixer,
    /// Fresh and bottled juices
    Juice,
    /// Syrups and sweeteners
    Syrup,
    /// Bitters and tinctures
    Bitters,
    /// Garnishes
    Garnish,
}

/// An equipment catalog entry.
///
/// # Examples
///
/// ```
/// use muddler_core::{EquipmentCategory, EquipmentItem};
///
/// let shaker = EquipmentItem {
///     id: 1,
///     category: EquipmentCategory::Shaking,
///     name: "Boston Shaker".to_string(),
///     icon: Some("shaker".to_string()),
/// };
///
/// assert_eq!(shaker.category, EquipmentCategory::Shaking);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Catalog identifier
    pub id: i32,
    /// Subcategory within the closed enumeration
    pub category: EquipmentCategory,
    /// Display name
    pub name: String,
    /// Optional icon token for UI rendering
    pub icon: Option<String>,
}

/// An ingredient catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientItem {
    /// Catalog identifier
    pub id: i32,
    /// Subcategory within the closed enumeration
    pub category: IngredientCategory,
    /// Display name
    pub name: String,
    /// Optional icon token for UI rendering
    pub icon: Option<String>,
}

/// A mood catalog entry.
///
/// The description and example-drinks text are used verbatim in prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
    /// Catalog identifier
    pub id: i32,
    /// Display name
    pub name: String,
    /// Free-text description of the mood
    pub description: String,
    /// Example drinks matching the mood, free text
    pub examples: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn equipment_category_round_trips_as_snake_case() {
        assert_eq!(EquipmentCategory::Glassware.to_string(), "glassware");
        assert_eq!(
            EquipmentCategory::from_str("shaking").unwrap(),
            EquipmentCategory::Shaking
        );
    }

    #[test]
    fn ingredient_category_rejects_unknown_values() {
        assert!(IngredientCategory::from_str("motor_oil").is_err());
    }
}
