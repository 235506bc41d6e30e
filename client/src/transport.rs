use data::{RawResponse, RequestBody, SearchRequest, SearchTransport, TransportError};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// `fetch` through gloo-net. Dropping the future does not abort the request.
#[derive(Debug, Clone, Default)]
pub struct GlooTransport;

fn js_error(err: JsValue) -> TransportError {
    TransportError::Network(format!("{err:?}"))
}

fn multipart(image: &File, fields: &[(&'static str, String)]) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob("image", image).map_err(js_error)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    Ok(form)
}

impl SearchTransport for GlooTransport {
    type Image = File;

    async fn send(&self, request: SearchRequest<File>) -> Result<RawResponse, TransportError> {
        let builder = request
            .headers()
            .into_iter()
            .fold(Request::post(&request.url), |builder, (name, value)| {
                builder.header(name, &value)
            });

        let prepared = match &request.body {
            RequestBody::Multipart { image, .. } => {
                builder.body(multipart(image, &request.form_fields())?)
            }
            RequestBody::Json(params) => {
                let json = serde_json::to_string(params)
                    .map_err(|err| TransportError::Decode(err.to_string()))?;
                builder.body(json)
            }
        }
        .map_err(|err| TransportError::Network(err.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        Ok(RawResponse { status, status_text, body })
    }
}
