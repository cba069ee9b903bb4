//! Orchestration of a single generation call.

use crate::{build_prompt, extract_json, parse_recipe_response};
use muddler_core::{GeneratedRecipe, GenerationRequest};
use muddler_error::MuddlerResult;
use muddler_interface::GenerationDriver;
use tracing::{debug, info, instrument};

/// Runs one request through prompt construction, the backend call,
/// extraction, and validation.
///
/// Holds a boxed driver, so the backend can be swapped without changing
/// anything downstream. The driver call is the sole suspension point; its
/// timeout is the driver's concern. No retries happen here; a failed call
/// or unusable response is surfaced to the caller as a single terminal
/// failure.
pub struct RecipeGenerator {
    driver: Box<dyn GenerationDriver>,
}

impl RecipeGenerator {
    /// Create a generator over a driver.
    pub fn new(driver: Box<dyn GenerationDriver>) -> Self {
        Self { driver }
    }

    /// Generate a validated recipe for a request.
    ///
    /// # Errors
    ///
    /// - [`muddler_error::GenerationUnavailable`] when the outbound call
    ///   fails;
    /// - [`muddler_error::RecipeParseError`] when the backend responded but
    ///   the content could not be turned into a usable recipe.
    #[instrument(skip(self, request), fields(
        provider = self.driver.provider_name(),
        model = self.driver.model_name(),
        mood = %request.mood_name,
    ))]
    pub async fn generate_recipe(
        &self,
        request: &GenerationRequest,
    ) -> MuddlerResult<GeneratedRecipe> {
        let prompt = build_prompt(request);
        debug!(prompt_length = prompt.len(), "Built generation prompt");

        let response = self.driver.generate(&prompt).await?;
        debug!(response_length = response.len(), "Received raw response");

        let json = extract_json(&response);
        let recipe = parse_recipe_response(&json)?;

        info!(
            recipe = %recipe.name,
            ingredients = recipe.ingredients.len(),
            steps = recipe.steps.len(),
            "Generated recipe"
        );
        Ok(recipe)
    }

    /// Provider name of the underlying driver.
    pub fn provider_name(&self) -> &'static str {
        self.driver.provider_name()
    }
}
