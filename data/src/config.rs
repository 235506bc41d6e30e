use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lenient;
use crate::upload::UploadPolicy;

pub const DEFAULT_SERVER_URL: &str = "https://clipcomparadorv2-production.up.railway.app";
pub const DEFAULT_CONTAINER_ID: &str = "clip-widget";
pub const DEFAULT_BUTTON_TEXT: &str = "Buscar productos similares";
pub const DEFAULT_TEXT_MAX_RESULTS: u32 = 20;
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
pub const SEARCH_PATH: &str = "/api/search";

const DEFAULT_EXAMPLES: [&str; 5] = [
    "delantal azul",
    "camisa clara",
    "delantal marrón",
    "camisa casual",
    "delantal negro",
];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn class(self) -> &'static str {
        match self {
            Layout::Grid => "clip-grid",
            Layout::List => "clip-grid clip-list",
        }
    }
}

/// Configuration object exactly as the host page wrote it. A field of the
/// wrong type reads as unset and falls back to its default.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawWidgetConfig {
    #[serde(deserialize_with = "lenient::string")]
    pub api_key: Option<String>,
    #[serde(deserialize_with = "lenient::plain_string")]
    pub server_url: Option<String>,
    #[serde(deserialize_with = "lenient::plain_string")]
    pub container_id: Option<String>,
    #[serde(deserialize_with = "lenient::small_count")]
    pub max_results: Option<u32>,
    #[serde(deserialize_with = "lenient::fraction")]
    pub threshold: Option<f32>,
    #[serde(deserialize_with = "lenient::plain_string")]
    pub button_text: Option<String>,
    #[serde(deserialize_with = "lenient::optional_flag")]
    pub show_attributes: Option<bool>,
    #[serde(deserialize_with = "lenient::optional_flag")]
    pub enable_refinement: Option<bool>,
    #[serde(deserialize_with = "lenient::layout")]
    pub layout: Option<Layout>,
    #[serde(deserialize_with = "lenient::count")]
    pub max_file_size: Option<u64>,
    #[serde(deserialize_with = "lenient::optional_string_list")]
    pub allowed_types: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::optional_string_list")]
    pub examples: Option<Vec<String>>,
}

/// Resolved configuration of one widget instance. Immutable after mount.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub api_key: String,
    pub server_url: String,
    pub container_id: String,
    pub max_results: Option<u32>,
    pub threshold: Option<f32>,
    pub button_text: String,
    pub show_attributes: bool,
    pub enable_refinement: bool,
    pub layout: Layout,
    pub max_file_size: Option<u64>,
    pub allowed_types: Option<Vec<String>>,
    pub examples: Vec<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl RawWidgetConfig {
    /// Applies defaults. Only a missing or blank `apiKey` is fatal; nothing
    /// else is validated, so a bad `serverUrl` surfaces as a network error.
    pub fn resolve(self) -> Result<WidgetConfig, ConfigError> {
        let api_key = non_blank(self.api_key).ok_or(ConfigError::MissingApiKey)?;
        let server_url = non_blank(self.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(WidgetConfig {
            api_key,
            server_url,
            container_id: non_blank(self.container_id)
                .unwrap_or_else(|| DEFAULT_CONTAINER_ID.to_string()),
            max_results: self.max_results,
            threshold: self.threshold,
            button_text: non_blank(self.button_text)
                .unwrap_or_else(|| DEFAULT_BUTTON_TEXT.to_string()),
            show_attributes: self.show_attributes.unwrap_or(true),
            enable_refinement: self.enable_refinement.unwrap_or(true),
            layout: self.layout.unwrap_or_default(),
            max_file_size: self.max_file_size.or(Some(DEFAULT_MAX_FILE_SIZE)),
            allowed_types: self.allowed_types.filter(|types| !types.is_empty()),
            examples: self.examples.unwrap_or_else(|| {
                DEFAULT_EXAMPLES.iter().map(|e| e.to_string()).collect()
            }),
        })
    }
}

impl WidgetConfig {
    pub fn search_endpoint(&self) -> String {
        format!("{}{}", self.server_url, SEARCH_PATH)
    }

    pub fn text_max_results(&self) -> u32 {
        self.max_results.unwrap_or(DEFAULT_TEXT_MAX_RESULTS)
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_bytes: self.max_file_size,
            allowed_types: self.allowed_types.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawWidgetConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_or_blank_key_is_fatal() {
        assert_eq!(raw("{}").resolve(), Err(ConfigError::MissingApiKey));
        assert_eq!(raw(r#"{"apiKey": "  "}"#).resolve(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn defaults_fill_everything_but_the_key() {
        let config = raw(r#"{"apiKey": "k-123"}"#).resolve().unwrap();
        assert_eq!(config.api_key, "k-123");
        assert_eq!(config.container_id, DEFAULT_CONTAINER_ID);
        assert_eq!(config.search_endpoint(), format!("{DEFAULT_SERVER_URL}/api/search"));
        assert_eq!(config.button_text, DEFAULT_BUTTON_TEXT);
        assert_eq!(config.text_max_results(), 20);
        assert_eq!(config.max_results, None);
        assert_eq!(config.layout, Layout::Grid);
        assert!(config.show_attributes && config.enable_refinement);
        assert_eq!(config.examples.len(), 5);
        assert_eq!(config.upload_policy().max_bytes, Some(DEFAULT_MAX_FILE_SIZE));
    }

    #[test]
    fn camel_case_fields_are_honoured() {
        let config = raw(
            r#"{
                "apiKey": "k",
                "serverUrl": "http://localhost:5000/",
                "containerId": "search-box",
                "maxResults": 6,
                "layout": "list",
                "showAttributes": false,
                "allowedTypes": ["image/png"],
                "unknownField": 1
            }"#,
        )
        .resolve()
        .unwrap();
        assert_eq!(config.search_endpoint(), "http://localhost:5000/api/search");
        assert_eq!(config.container_id, "search-box");
        assert_eq!(config.text_max_results(), 6);
        assert_eq!(config.layout, Layout::List);
        assert!(!config.show_attributes);
        assert_eq!(config.allowed_types, Some(vec!["image/png".to_string()]));
    }

    #[test]
    fn unknown_layout_falls_back_to_grid() {
        let config = raw(r#"{"apiKey": "k", "layout": "masonry"}"#).resolve().unwrap();
        assert_eq!(config.layout, Layout::Grid);
        let config = raw(r#"{"apiKey": "k", "layout": "LIST"}"#).resolve().unwrap();
        assert_eq!(config.layout, Layout::List);
    }

    #[test]
    fn numeric_fields_accept_strings_and_fractions() {
        let config = raw(r#"{"apiKey": "k", "maxResults": "12"}"#).resolve().unwrap();
        assert_eq!(config.max_results, Some(12));
        let config = raw(r#"{"apiKey": "k", "maxResults": 12.5}"#).resolve().unwrap();
        assert_eq!(config.max_results, Some(12));
        let config = raw(r#"{"apiKey": "k", "maxResults": -3, "threshold": "0.25"}"#)
            .resolve()
            .unwrap();
        assert_eq!(config.max_results, None);
        assert_eq!(config.threshold, Some(0.25));
    }

    #[test]
    fn mistyped_fields_take_defaults() {
        let config = raw(
            r#"{
                "apiKey": "k",
                "serverUrl": 5000,
                "containerId": ["x"],
                "showAttributes": "no",
                "maxFileSize": "big",
                "examples": "camisa",
                "buttonText": null
            }"#,
        )
        .resolve()
        .unwrap();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(config.container_id, DEFAULT_CONTAINER_ID);
        assert!(config.show_attributes);
        assert_eq!(config.max_file_size, Some(DEFAULT_MAX_FILE_SIZE));
        assert_eq!(config.examples.len(), 5);
        assert_eq!(config.button_text, DEFAULT_BUTTON_TEXT);
    }
}
