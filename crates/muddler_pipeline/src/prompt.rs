//! Prompt construction for recipe generation.

use muddler_core::GenerationRequest;

/// The output-format contract embedded in every prompt.
///
/// The parser in this crate accepts exactly this shape, so the two must be
/// kept in sync.
const FORMAT_CONTRACT: &str = r#"{"name": string, "description": string, "ingredients": [{"name": string, "amount": string}], "steps": [string], "equipmentUsed": [string]}"#;

/// Build the generation prompt for a request.
///
/// Pure function of its inputs: the full equipment and ingredient lists are
/// joined by comma, the mood name/description/examples appear verbatim, and
/// the instruction block pins the backend to the listed items and to a
/// single JSON object matching [`FORMAT_CONTRACT`]. Empty inputs are
/// rejected upstream, not here.
///
/// # Examples
///
/// ```
/// use muddler_core::GenerationRequest;
/// use muddler_pipeline::build_prompt;
///
/// let request = GenerationRequest {
///     equipment_names: vec!["Shaker".to_string()],
///     ingredient_names: vec!["Gin".to_string(), "Tonic".to_string()],
///     mood_name: "Relaxed".to_string(),
///     mood_description: "Low-effort, familiar drinks".to_string(),
///     mood_examples: "Gin & Tonic".to_string(),
/// };
///
/// let prompt = build_prompt(&request);
/// assert!(prompt.contains("Gin, Tonic"));
/// assert!(prompt.contains("Mood: Relaxed"));
/// ```
pub fn build_prompt(request: &GenerationRequest) -> String {
    let equipment = request.equipment_names.join(", ");
    let ingredients = request.ingredient_names.join(", ");

    format!(
        "You are a professional bartender. Create one cocktail recipe for the \
         constraints below.\n\
         \n\
         Available equipment: {equipment}\n\
         Available ingredients: {ingredients}\n\
         \n\
         Mood: {mood_name}\n\
         Mood description: {mood_description}\n\
         Example drinks for this mood: {mood_examples}\n\
         \n\
         Rules:\n\
         - Use ONLY the listed equipment and ingredients. Do not introduce \
         anything that is not listed.\n\
         - Give a numeric or textual amount for every ingredient.\n\
         - Respond with exactly one JSON object and nothing else, matching \
         this shape:\n\
         {contract}\n",
        equipment = equipment,
        ingredients = ingredients,
        mood_name = request.mood_name,
        mood_description = request.mood_description,
        mood_examples = request.mood_examples,
        contract = FORMAT_CONTRACT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            equipment_names: vec!["Shaker".to_string(), "Jigger".to_string()],
            ingredient_names: vec!["Vodka".to_string(), "Lime Juice".to_string()],
            mood_name: "Happy".to_string(),
            mood_description: "Bright, celebratory drinks".to_string(),
            mood_examples: "Mojito, Aperol Spritz, Margarita".to_string(),
        }
    }

    #[test]
    fn prompt_contains_comma_joined_lists() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Shaker, Jigger"));
        assert!(prompt.contains("Vodka, Lime Juice"));
    }

    #[test]
    fn prompt_labels_mood_and_keeps_examples_verbatim() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Mood: Happy"));
        assert!(prompt.contains("Bright, celebratory drinks"));
        assert!(prompt.contains("Mojito, Aperol Spritz, Margarita"));
    }

    #[test]
    fn prompt_embeds_format_contract() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("equipmentUsed"));
        assert!(prompt.contains("exactly one JSON object"));
        assert!(prompt.contains("ONLY the listed equipment and ingredients"));
    }

    #[test]
    fn prompt_is_pure() {
        let r = request();
        assert_eq!(build_prompt(&r), build_prompt(&r));
    }
}
