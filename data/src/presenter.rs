//! Turns a decoded `/api/search` answer into what the widget shows.
//!
//! Precedence, first match wins:
//! 1. `needs_refinement`: suggestion chips grouped by facet
//! 2. `success` with at least one product: the card grid
//! 3. `error == "category_not_detected"`: message plus the allowed categories
//! 4. anything else: a single message, server supplied when available
//!
//! Every string produced here is plain text; the view layer escapes it.

use serde_json::Value;

use crate::config::{Layout, WidgetConfig};
use crate::error::TransportError;
use crate::lenient::scalar_text;
use crate::{Product, SearchResponse};

pub const CATEGORY_NOT_DETECTED: &str = "category_not_detected";
pub const DEFAULT_CATEGORY_LABEL: &str = "Producto";
pub const NO_RESULTS_MESSAGE: &str = "No se encontraron productos";
pub const DEFAULT_REFINEMENT_MESSAGE: &str =
    "Tu búsqueda es muy general. ¿Podrías ser más específico?";
pub const DEFAULT_CATEGORY_MESSAGE: &str =
    "No pudimos reconocer una categoría comercializada en tu consulta.";
pub const DEFAULT_CATEGORY_DETAILS: &str = "Probá con una de estas categorías disponibles.";
pub const MISSING_PRICE: &str = "N/A";

/// Attribute keys that carry the product link rather than a displayable value.
const PRODUCT_URL_KEYS: [&str; 2] = ["url_producto", "product_url"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterOptions {
    pub show_attributes: bool,
    pub enable_refinement: bool,
    pub layout: Layout,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self { show_attributes: true, enable_refinement: true, layout: Layout::Grid }
    }
}

impl From<&WidgetConfig> for PresenterOptions {
    fn from(config: &WidgetConfig) -> Self {
        Self {
            show_attributes: config.show_attributes,
            enable_refinement: config.enable_refinement,
            layout: config.layout,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    Refinement(RefinementPrompt),
    Results(ResultsView),
    CategoryError(CategoryErrorView),
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Color,
    Context,
}

impl Facet {
    pub fn label(self) -> &'static str {
        match self {
            Facet::Color => "Colores",
            Facet::Context => "Estilos",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionGroup {
    pub facet: Facet,
    pub chips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefinementPrompt {
    pub message: String,
    pub groups: Vec<SuggestionGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub count_label: String,
    pub layout: Layout,
    pub cards: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryErrorView {
    pub message: String,
    pub details: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockIndicator {
    pub in_stock: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Stable key for keyed list rendering.
    pub key: String,
    pub name: String,
    pub image_url: Option<String>,
    pub category: String,
    pub sku: Option<String>,
    pub price: String,
    pub stock: Option<StockIndicator>,
    pub similarity: Option<String>,
    pub attributes: Vec<AttributeRow>,
    pub product_url: Option<String>,
}

pub fn present(response: &SearchResponse, options: &PresenterOptions) -> Presentation {
    if response.needs_refinement && options.enable_refinement {
        return Presentation::Refinement(refinement_prompt(response));
    }
    if response.success && !response.results.is_empty() {
        return Presentation::Results(results_view(response, options));
    }
    if response.error.as_deref() == Some(CATEGORY_NOT_DETECTED) {
        return Presentation::CategoryError(CategoryErrorView {
            message: response
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY_MESSAGE.to_string()),
            details: response
                .details
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY_DETAILS.to_string()),
            categories: response.available_categories.clone(),
        });
    }
    if response.success {
        return Presentation::NotFound(NO_RESULTS_MESSAGE.to_string());
    }
    Presentation::NotFound(
        response
            .message
            .clone()
            .or_else(|| response.error.clone())
            .unwrap_or_else(|| NO_RESULTS_MESSAGE.to_string()),
    )
}

pub fn present_failure(error: &TransportError) -> Presentation {
    Presentation::NotFound(error.user_message().to_string())
}

fn refinement_prompt(response: &SearchResponse) -> RefinementPrompt {
    let groups = [
        (Facet::Color, &response.suggestions.colors),
        (Facet::Context, &response.suggestions.contexts),
    ]
    .into_iter()
    .filter(|(_, chips)| !chips.is_empty())
    .map(|(facet, chips)| SuggestionGroup { facet, chips: chips.clone() })
    .collect();

    RefinementPrompt {
        message: response
            .refinement_message
            .clone()
            .unwrap_or_else(|| DEFAULT_REFINEMENT_MESSAGE.to_string()),
        groups,
    }
}

fn results_view(response: &SearchResponse, options: &PresenterOptions) -> ResultsView {
    let total = response
        .total_results
        .unwrap_or(response.results.len() as u64);
    let count_label = if total == 1 {
        "1 producto encontrado".to_string()
    } else {
        format!("{total} productos encontrados")
    };

    ResultsView {
        count_label,
        layout: options.layout,
        cards: response
            .results
            .iter()
            .enumerate()
            .map(|(index, product)| product_card(index, product, options))
            .collect(),
    }
}

pub fn product_card(index: usize, product: &Product, options: &PresenterOptions) -> ProductCard {
    let identity = product
        .product_id
        .as_deref()
        .or(product.sku.as_deref())
        .or(product.image_url.as_deref())
        .unwrap_or(&product.name);

    ProductCard {
        key: format!("{index}-{}", urlencoding::encode(identity)),
        name: product.name.clone(),
        image_url: product.image_url.clone().filter(|url| !url.trim().is_empty()),
        category: product
            .category
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY_LABEL.to_string()),
        sku: product.sku.clone(),
        price: format_price(product.price),
        stock: product.stock.map(stock_indicator),
        similarity: product.similarity.map(format_similarity),
        attributes: if options.show_attributes {
            attribute_rows(product)
        } else {
            Vec::new()
        },
        product_url: product_url(product),
    }
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() => format!("${p:.2}"),
        _ => MISSING_PRICE.to_string(),
    }
}

pub fn format_similarity(similarity: f64) -> String {
    format!("{}%", (similarity * 100.0).round() as i64)
}

fn stock_indicator(stock: i64) -> StockIndicator {
    if stock > 0 {
        StockIndicator { in_stock: true, label: format!("✓ Stock: {stock}") }
    } else {
        StockIndicator { in_stock: false, label: "✗ Sin stock".to_string() }
    }
}

/// `color_principal` -> `Color Principal`.
pub fn label_case(key: &str) -> String {
    key.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::Bool(true) => "Sí".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(scalar_text)
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(detail) => {
            if detail.get("visible") == Some(&Value::Bool(false)) {
                return None;
            }
            return detail.get("value").and_then(display_value);
        }
        other => scalar_text(other)?.trim().to_string(),
    };
    (!text.is_empty()).then_some(text)
}

fn attribute_rows(product: &Product) -> Vec<AttributeRow> {
    product
        .attributes
        .iter()
        .filter(|(key, _)| !PRODUCT_URL_KEYS.contains(&key.as_str()))
        .filter_map(|(key, value)| {
            display_value(value).map(|value| AttributeRow { label: label_case(key), value })
        })
        .collect()
}

fn is_web_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Link target for the "ver producto" button. Only `http(s)` URLs qualify.
fn product_url(product: &Product) -> Option<String> {
    let from_attributes = PRODUCT_URL_KEYS
        .iter()
        .filter_map(|key| product.attributes.get(*key))
        .find_map(|value| match value {
            Value::Object(detail) => detail
                .get("value")
                .or_else(|| detail.get("url"))
                .and_then(Value::as_str)
                .map(str::to_string),
            other => other.as_str().map(str::to_string),
        });

    from_attributes
        .into_iter()
        .chain(product.product_url.clone())
        .map(|url| url.trim().to_string())
        .find(|url| is_web_url(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> SearchResponse {
        serde_json::from_str(json).unwrap()
    }

    fn cards(presentation: Presentation) -> Vec<ProductCard> {
        match presentation {
            Presentation::Results(view) => view.cards,
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn renders_price_badge_and_stock() {
        let response = decode(
            r#"{"success": true, "results": [{"name": "Camisa", "sku": "A1", "image_url": "x.jpg",
                "price": 19.99, "stock": 5, "similarity": 0.87}]}"#,
        );
        let presentation = present(&response, &PresenterOptions::default());
        let Presentation::Results(view) = &presentation else {
            panic!("expected results");
        };
        assert_eq!(view.count_label, "1 producto encontrado");
        let card = &view.cards[0];
        assert_eq!(card.name, "Camisa");
        assert_eq!(card.price, "$19.99");
        assert_eq!(card.similarity.as_deref(), Some("87%"));
        assert_eq!(card.category, DEFAULT_CATEGORY_LABEL);
        let stock = card.stock.as_ref().unwrap();
        assert!(stock.in_stock);
        assert_eq!(stock.label, "✓ Stock: 5");
    }

    #[test]
    fn optional_fields_stay_hidden() {
        let response = decode(
            r#"{"success": true, "total_results": 7, "results": [{"name": "Gorra", "stock": 0}]}"#,
        );
        let presentation = present(&response, &PresenterOptions::default());
        let Presentation::Results(view) = &presentation else {
            panic!("expected results");
        };
        assert_eq!(view.count_label, "7 productos encontrados");
        let card = &view.cards[0];
        assert_eq!(card.price, MISSING_PRICE);
        assert_eq!(card.similarity, None);
        assert_eq!(card.image_url, None);
        assert!(!card.stock.as_ref().unwrap().in_stock);
    }

    #[test]
    fn refinement_chips_come_in_facet_order() {
        let response = decode(r#"{"needs_refinement": true, "suggestions": {"colores": ["azul", "negro"]}}"#);
        match present(&response, &PresenterOptions::default()) {
            Presentation::Refinement(prompt) => {
                assert_eq!(prompt.message, DEFAULT_REFINEMENT_MESSAGE);
                assert_eq!(prompt.groups.len(), 1);
                assert_eq!(prompt.groups[0].facet, Facet::Color);
                assert_eq!(prompt.groups[0].chips, vec!["azul", "negro"]);
            }
            other => panic!("expected refinement, got {other:?}"),
        }
    }

    #[test]
    fn refinement_wins_over_results_unless_disabled() {
        let response = decode(
            r#"{"success": true, "needs_refinement": true, "refinement_message": "Más detalles",
                "suggestions": {"colores": ["rojo"], "contextos": ["cocina"]},
                "results": [{"name": "Delantal"}]}"#,
        );
        match present(&response, &PresenterOptions::default()) {
            Presentation::Refinement(prompt) => {
                assert_eq!(prompt.message, "Más detalles");
                let facets: Vec<Facet> = prompt.groups.iter().map(|g| g.facet).collect();
                assert_eq!(facets, vec![Facet::Color, Facet::Context]);
            }
            other => panic!("expected refinement, got {other:?}"),
        }
        let options = PresenterOptions { enable_refinement: false, ..PresenterOptions::default() };
        assert_eq!(cards(present(&response, &options)).len(), 1);
    }

    #[test]
    fn category_not_detected_lists_categories() {
        let response = decode(
            r#"{"success": false, "error": "category_not_detected",
                "available_categories": ["camisas", "delantales"]}"#,
        );
        assert_eq!(
            present(&response, &PresenterOptions::default()),
            Presentation::CategoryError(CategoryErrorView {
                message: DEFAULT_CATEGORY_MESSAGE.to_string(),
                details: DEFAULT_CATEGORY_DETAILS.to_string(),
                categories: vec!["camisas".to_string(), "delantales".to_string()],
            })
        );
    }

    #[test]
    fn empty_success_is_not_found() {
        let response = decode(r#"{"success": true, "results": []}"#);
        assert_eq!(
            present(&response, &PresenterOptions::default()),
            Presentation::NotFound(NO_RESULTS_MESSAGE.to_string())
        );
    }

    #[test]
    fn server_message_beats_error_code() {
        let response = decode(r#"{"success": false, "error": "invalid_api_key", "message": "API Key inválido"}"#);
        assert_eq!(
            present(&response, &PresenterOptions::default()),
            Presentation::NotFound("API Key inválido".to_string())
        );
        let response = decode(r#"{"error": "Endpoint no encontrado"}"#);
        assert_eq!(
            present(&response, &PresenterOptions::default()),
            Presentation::NotFound("Endpoint no encontrado".to_string())
        );
    }

    #[test]
    fn attributes_are_labelled_filtered_and_ordered() {
        let response = decode(
            r#"{"success": true, "results": [{"name": "Camisa", "attributes": {
                "color_principal": "azul",
                "url_producto": {"value": "https://tienda.example/camisa"},
                "talle": {"value": "M", "visible": true},
                "material": {"value": "algodón", "visible": false},
                "notas": "  ",
                "tallas_disponibles": ["S", "M", ""],
                "lavable": true
            }}]}"#,
        );
        let card = cards(present(&response, &PresenterOptions::default())).remove(0);
        let rows: Vec<(&str, &str)> = card
            .attributes
            .iter()
            .map(|row| (row.label.as_str(), row.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Color Principal", "azul"),
                ("Talle", "M"),
                ("Tallas Disponibles", "S, M"),
                ("Lavable", "Sí"),
            ]
        );
        assert_eq!(card.product_url.as_deref(), Some("https://tienda.example/camisa"));

        let options = PresenterOptions { show_attributes: false, ..PresenterOptions::default() };
        let card = cards(present(&response, &options)).remove(0);
        assert!(card.attributes.is_empty());
        assert!(card.product_url.is_some());
    }

    #[test]
    fn product_link_requires_web_scheme() {
        let response = decode(
            r#"{"success": true, "results": [
                {"name": "A", "product_url": "javascript:alert(1)"},
                {"name": "B", "attributes": {"url_producto": "ftp://x"}, "product_url": "http://shop/b"}
            ]}"#,
        );
        let cards = cards(present(&response, &PresenterOptions::default()));
        assert_eq!(cards[0].product_url, None);
        assert_eq!(cards[1].product_url.as_deref(), Some("http://shop/b"));
    }

    #[test]
    fn card_keys_are_unique() {
        let response = decode(r#"{"success": true, "results": [{"name": "X", "sku": "A 1"}, {"name": "X", "sku": "A 1"}]}"#);
        let cards = cards(present(&response, &PresenterOptions::default()));
        assert_eq!(cards[0].key, "0-A%201");
        assert_ne!(cards[0].key, cards[1].key);
    }

    #[test]
    fn failures_use_friendly_text() {
        let presentation = present_failure(&TransportError::Network("TypeError".into()));
        let Presentation::NotFound(message) = presentation else {
            panic!("expected message");
        };
        assert!(message.starts_with("No se puede conectar"));
    }

    #[test]
    fn label_case_capitalizes_each_word() {
        assert_eq!(label_case("tipo_de_tela"), "Tipo De Tela");
        assert_eq!(label_case("ñandú"), "Ñandú");
        assert_eq!(label_case("__"), "");
    }
}
