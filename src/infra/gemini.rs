//! Recipe advisor backed by the Gemini `generateContent` REST endpoint.
//!
//! - [`RecipeSource`] is the only thing the rest of the app depends on.
//! - Every failure collapses into `None`; nothing is retried or cached.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{City, CraftableItem, Ingredient, ItemType};
use crate::util::settings::AdvisorSettings;
use crate::util::version::user_agent;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Turns free text into a candidate recipe.
#[allow(async_fn_in_trait)]
pub trait RecipeSource {
    async fn lookup_recipe(&self, query: &str) -> Option<CraftableItem>;
}

#[derive(Debug, Error)]
pub enum GeminiClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
    #[error("failed to decode recipe: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Shape the model is asked to answer with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecipeResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<AiIngredient>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiIngredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub recommended_city: String,
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: Url,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn from_settings(settings: &AdvisorSettings) -> Result<Self, GeminiClientError> {
        let base_url = Url::parse(&settings.base_url)?;
        let http = Client::builder()
            .user_agent(user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            model: settings.model.clone(),
            api_key: settings
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Asks the model for a recipe. `Ok(None)` means "no credential" or
    /// "model returned nothing".
    pub async fn consult(&self, query: &str) -> Result<Option<AiRecipeResponse>, GeminiClientError> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("advisor API key not configured; skipping lookup");
            return Ok(None);
        };

        let url = self.url()?;
        debug!(%url, query, "requesting advisor recipe");

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&request_body(query))
            .send()
            .await?
            .error_for_status()?;
        let payload: GenerateContentResponse = response.json().await?;

        match payload.first_text() {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn url(&self) -> Result<Url, GeminiClientError> {
        let model = self.model.trim();
        if model.is_empty() || model.contains('/') {
            return Err(GeminiClientError::Api(format!("invalid model name: {model:?}")));
        }
        Ok(self
            .base_url
            .join(&format!("models/{model}:generateContent"))?)
    }
}

impl RecipeSource for GeminiClient {
    async fn lookup_recipe(&self, query: &str) -> Option<CraftableItem> {
        match self.consult(query).await {
            Ok(Some(response)) => {
                let item = recipe_from_response(response);
                if item.is_none() {
                    warn!(query, "advisor answered without usable ingredients");
                }
                item
            }
            Ok(None) => None,
            Err(err) => {
                warn!(query, "advisor lookup failed: {err}");
                None
            }
        }
    }
}

/// Builds a queue-ready item from the model's answer.
///
/// Fresh `ai_` id, tier 0, generic ingredient category, one batch per craft.
/// Cities that are not an exact label fall back to [`City::Any`]. Returns
/// `None` rather than a half-filled item when nothing usable is left.
pub fn recipe_from_response(response: AiRecipeResponse) -> Option<CraftableItem> {
    let name = response.name.trim();
    if name.is_empty() {
        return None;
    }

    let ingredients: Vec<Ingredient> = response
        .ingredients
        .into_iter()
        .filter(|ing| !ing.name.trim().is_empty())
        .filter(|ing| ing.quantity.is_finite() && ing.quantity > 0.0)
        .map(|ing| Ingredient {
            name: ing.name.trim().to_string(),
            quantity: ing.quantity,
            recommended_city: City::from_label(ing.recommended_city.trim()).unwrap_or(City::Any),
            tier: None,
            unique_name: None,
        })
        .collect();

    if ingredients.is_empty() {
        return None;
    }

    let description = response.description.trim();
    Some(CraftableItem {
        id: format!("ai_{}", Uuid::new_v4().simple()),
        name: name.to_string(),
        tier: 0,
        item_type: ItemType::Ingredient,
        ingredients,
        yield_base: Some(1),
        description: (!description.is_empty()).then(|| description.to_string()),
        unique_name: None,
    })
}

pub fn build_prompt(query: &str) -> String {
    let cities = City::ALL
        .iter()
        .filter(|city| !city.is_wildcard())
        .map(City::label)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You are an expert Albion Online crafter.\n\
         The user is asking about a recipe or crafting advice for: \"{query}\".\n\
         Provide a structured JSON response with the best guess for ingredients based on the game's mechanics.\n\
         If the user input is vague, suggest a popular relevant item.\n\
         The quantities should be for ONE batch (yield) of the item (usually 10 for food, 5 for potions).\n\
         For 'recommendedCity', choose from: {cities}."
    )
}

fn request_body(query: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": build_prompt(query) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING", "description": "Name of the item to craft" },
                    "description": { "type": "STRING", "description": "Brief description of utility" },
                    "ingredients": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": { "type": "STRING" },
                                "quantity": { "type": "NUMBER" },
                                "recommendedCity": { "type": "STRING" }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<CandidateDto>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateDto {
    #[serde(default)]
    content: Option<ContentDto>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDto {
    #[serde(default)]
    parts: Vec<PartDto>,
}

#[derive(Debug, Default, Deserialize)]
struct PartDto {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .find(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(ingredients: Vec<(&str, f64, &str)>) -> AiRecipeResponse {
        AiRecipeResponse {
            name: "Roast Pork".into(),
            description: "Heals a lot.".into(),
            ingredients: ingredients
                .into_iter()
                .map(|(name, quantity, city)| AiIngredient {
                    name: name.into(),
                    quantity,
                    recommended_city: city.into(),
                })
                .collect(),
        }
    }

    #[test]
    fn response_becomes_generic_one_batch_item() {
        let item = recipe_from_response(response(vec![
            ("Pork", 36.0, "Caerleon"),
            ("Corn", 18.0, "Bridgewatch"),
        ]))
        .unwrap();

        assert!(item.id.starts_with("ai_"));
        assert_eq!(item.tier, 0);
        assert_eq!(item.item_type, ItemType::Ingredient);
        assert_eq!(item.yield_per_craft(), 1);
        assert_eq!(item.description.as_deref(), Some("Heals a lot."));
        assert_eq!(item.ingredients[0].recommended_city, City::Caerleon);
        assert_eq!(item.ingredients[1].recommended_city, City::Bridgewatch);
    }

    #[test]
    fn unknown_city_falls_back_to_wildcard() {
        let item = recipe_from_response(response(vec![
            ("Pork", 1.0, "caerleon"),
            ("Milk", 1.0, "Royal Continent"),
            ("Eggs", 1.0, ""),
        ]))
        .unwrap();
        assert!(item
            .ingredients
            .iter()
            .all(|ing| ing.recommended_city == City::Any));
    }

    #[test]
    fn each_conversion_gets_a_fresh_id() {
        let a = recipe_from_response(response(vec![("Pork", 1.0, "Caerleon")])).unwrap();
        let b = recipe_from_response(response(vec![("Pork", 1.0, "Caerleon")])).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn unusable_answers_are_rejected_whole() {
        assert!(recipe_from_response(response(vec![])).is_none());
        assert!(recipe_from_response(response(vec![("", 3.0, "Martlock")])).is_none());
        assert!(recipe_from_response(response(vec![("Milk", -1.0, "Martlock")])).is_none());
        assert!(recipe_from_response(response(vec![("Milk", f64::NAN, "Martlock")])).is_none());

        let mut nameless = response(vec![("Milk", 1.0, "Martlock")]);
        nameless.name = "  ".into();
        assert!(recipe_from_response(nameless).is_none());
    }

    #[test]
    fn bad_lines_are_dropped_but_good_ones_kept() {
        let item = recipe_from_response(response(vec![
            ("Milk", 0.0, "Lymhurst"),
            ("Butter", 2.5, "Martlock"),
        ]))
        .unwrap();
        assert_eq!(item.ingredients.len(), 1);
        assert_eq!(item.ingredients[0].quantity, 2.5);
    }

    #[test]
    fn prompt_embeds_query_and_cities() {
        let prompt = build_prompt("T8 Roast Pork");
        assert!(prompt.contains("\"T8 Roast Pork\""));
        assert!(prompt.contains("Fort Sterling"));
        assert!(!prompt.contains("Any City"));
    }

    #[test]
    fn request_asks_for_json_schema() {
        let body = request_body("stew");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["properties"]["ingredients"]["type"],
            "ARRAY"
        );
    }

    #[test]
    fn generate_content_payload_yields_recipe() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "{\"name\":\"Omelette\",\"description\":\"Food\",\"ingredients\":[{\"name\":\"Eggs\",\"quantity\":18,\"recommendedCity\":\"Fort Sterling\"}]}"
                    }]
                }
            }]
        }"#;
        let payload: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let parsed: AiRecipeResponse = serde_json::from_str(payload.first_text().unwrap()).unwrap();
        assert_eq!(parsed.name, "Omelette");
        assert_eq!(parsed.ingredients[0].recommended_city, "Fort Sterling");
        assert_eq!(parsed.ingredients[0].quantity, 18.0);
    }

    #[test]
    fn empty_candidates_have_no_text() {
        let payload: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.first_text().is_none());
    }

    #[test]
    fn model_path_is_joined_onto_base() {
        let client = GeminiClient::from_settings(&AdvisorSettings::default()).unwrap();
        assert_eq!(
            client.url().unwrap().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let settings = AdvisorSettings {
            base_url: "not a url".into(),
            ..AdvisorSettings::default()
        };
        assert!(matches!(
            GeminiClient::from_settings(&settings),
            Err(GeminiClientError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_short_circuits_without_network() {
        let settings = AdvisorSettings {
            api_key: Some("   ".into()),
            base_url: "http://127.0.0.1:9/".into(),
            ..AdvisorSettings::default()
        };
        let client = GeminiClient::from_settings(&settings).unwrap();
        assert!(!client.is_configured());
        assert!(client.consult("anything").await.unwrap().is_none());
        assert!(client.lookup_recipe("anything").await.is_none());
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_none() {
        let settings = AdvisorSettings {
            api_key: Some("test-key".into()),
            base_url: "http://127.0.0.1:9/".into(),
            ..AdvisorSettings::default()
        };
        let client = GeminiClient::from_settings(&settings).unwrap();
        assert!(client.consult("stew").await.is_err());
        assert!(client.lookup_recipe("stew").await.is_none());
    }
}
