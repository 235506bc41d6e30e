use std::future::Future;

use log::{debug, error};

use crate::config::WidgetConfig;
use crate::error::TransportError;
use crate::query::SearchQuery;
use crate::{SearchResponse, TextSearchParams};

pub const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    /// `multipart/form-data`; the browser picks the boundary.
    Multipart {
        image: F,
        max_results: Option<u32>,
        threshold: Option<f32>,
    },
    Json(TextSearchParams),
}

/// One `POST {serverUrl}/api/search`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest<F> {
    pub url: String,
    pub api_key: String,
    pub body: RequestBody<F>,
}

impl<F> SearchRequest<F> {
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![(API_KEY_HEADER, self.api_key.clone())];
        if matches!(self.body, RequestBody::Json(_)) {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        headers
    }

    /// Text fields of a multipart body, in the order they are appended after `image`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        match &self.body {
            RequestBody::Multipart { max_results, threshold, .. } => max_results
                .map(|n| ("max_results", n.to_string()))
                .into_iter()
                .chain(threshold.map(|t| ("threshold", t.to_string())))
                .collect(),
            RequestBody::Json(_) => Vec::new(),
        }
    }
}

/// Status line and raw body of a finished HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs exactly one HTTP exchange per call. No retries.
pub trait SearchTransport {
    type Image: Clone;

    fn send(
        &self,
        request: SearchRequest<Self::Image>,
    ) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

/// The body is parsed whatever the status, since domain errors such as
/// `category_not_detected` arrive with a 4xx code.
pub fn decode_response(raw: RawResponse) -> Result<SearchResponse, TransportError> {
    match serde_json::from_str::<SearchResponse>(&raw.body) {
        Ok(response) => Ok(response),
        Err(_) if !raw.is_success() => Err(TransportError::Status {
            status: raw.status,
            reason: raw.status_text,
        }),
        Err(err) => Err(TransportError::Decode(err.to_string())),
    }
}

pub struct SearchClient<T> {
    transport: T,
    endpoint: String,
    api_key: String,
    max_results: Option<u32>,
    text_max_results: u32,
    threshold: Option<f32>,
}

impl<T: SearchTransport> SearchClient<T> {
    pub fn new(config: &WidgetConfig, transport: T) -> Self {
        Self {
            transport,
            endpoint: config.search_endpoint(),
            api_key: config.api_key.clone(),
            max_results: config.max_results,
            text_max_results: config.text_max_results(),
            threshold: config.threshold,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn request_for(&self, query: SearchQuery<T::Image>) -> SearchRequest<T::Image> {
        let body = match query {
            SearchQuery::Image(image) => RequestBody::Multipart {
                image,
                max_results: self.max_results,
                threshold: self.threshold,
            },
            SearchQuery::Text(query) => RequestBody::Json(TextSearchParams {
                query,
                max_results: Some(self.text_max_results),
            }),
        };
        SearchRequest { url: self.endpoint.clone(), api_key: self.api_key.clone(), body }
    }

    pub async fn search(&self, query: SearchQuery<T::Image>) -> Result<SearchResponse, TransportError> {
        let request = self.request_for(query);
        debug!("POST {} ({})", request.url, match request.body {
            RequestBody::Multipart { .. } => "image",
            RequestBody::Json(_) => "text",
        });
        let raw = self.transport.send(request).await?;
        decode_response(raw).inspect_err(|err| error!("search response rejected: {err}"))
    }
}
