use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod config;
pub mod controller;
pub mod error;
mod lenient;
pub mod presenter;
pub mod query;
pub mod search_client;
pub mod session;
pub mod upload;

pub use config::{Layout, RawWidgetConfig, WidgetConfig};
pub use controller::SearchController;
pub use error::{ConfigError, SubmitRejected, TransportError, ValidationError};
pub use presenter::{Presentation, ProductCard, ResultsView};
pub use query::SearchQuery;
pub use search_client::{RawResponse, RequestBody, SearchClient, SearchRequest, SearchTransport};
pub use session::{Phase, Pick, SearchSession, SearchTab};
pub use upload::{ImageFileInfo, UploadPolicy};

/// JSON body of a text search.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TextSearchParams {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

/// Body of every `/api/search` answer.
///
/// The server uses the same envelope for hits, empty results, refinement
/// prompts and domain errors. Fields with an unexpected type decode as absent.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(deserialize_with = "lenient::products")]
    pub results: Vec<Product>,
    #[serde(deserialize_with = "lenient::count")]
    pub total_results: Option<u64>,
    #[serde(deserialize_with = "lenient::string")]
    pub error: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub details: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub available_categories: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub needs_refinement: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub refinement_message: Option<String>,
    #[serde(deserialize_with = "lenient::suggestions")]
    pub suggestions: Suggestions,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Suggestions {
    #[serde(rename = "colores", deserialize_with = "lenient::string_list")]
    pub colors: Vec<String>,
    #[serde(rename = "contextos", deserialize_with = "lenient::string_list")]
    pub contexts: Vec<String>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.contexts.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "lenient::string")]
    pub product_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sku: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub stock: Option<i64>,
    #[serde(deserialize_with = "lenient::string")]
    pub category: Option<String>,
    /// Score in `[0, 1]`. The text-search fallback path reports it as `clip_similarity`.
    #[serde(alias = "clip_similarity", deserialize_with = "lenient::number")]
    pub similarity: Option<f64>,
    #[serde(deserialize_with = "lenient::object")]
    pub attributes: Map<String, Value>,
    #[serde(deserialize_with = "lenient::string")]
    pub product_url: Option<String>,
}
