//! Models API surface.

use std::sync::Arc;

use prodshot_types::request::GenerationRequest;
use prodshot_types::response::GenerateContentResponse;

use crate::client::ClientInner;
use crate::data_url::DataUrl;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Issue one `generateContent` call for a built request.
    ///
    /// # Errors
    /// Returns `Error::Api` for non-success responses and transport/parse
    /// errors otherwise.
    pub async fn generate_content(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerateContentResponse> {
        let model = request.model_id();
        let url = build_model_method_url(&self.inner, model, "generateContent");
        let body = request.into_body();

        tracing::debug!(model, "issuing generateContent request");
        let request = self.inner.http.post(url).json(&body);
        let response = self.inner.send(request).await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(model, status, "generateContent failed");
            return Err(Error::Api { status, message });
        }
        Ok(response.json::<GenerateContentResponse>().await?)
    }

    /// Issue one generation call and extract the first inline image from the
    /// response, re-encoded as a `data:image/png;base64,` display string.
    ///
    /// # Errors
    /// `Error::EmptyResponse` when no response part carries image bytes, in
    /// addition to the `generate_content` errors.
    pub async fn generate_image(&self, request: GenerationRequest) -> Result<DataUrl> {
        let response = self.generate_content(request).await?;
        let blob = response.first_inline_image().ok_or(Error::EmptyResponse)?;
        Ok(DataUrl::png(blob.data.clone()))
    }
}

fn transform_model_name(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

fn build_model_method_url(inner: &ClientInner, model: &str, method: &str) -> String {
    let model = transform_model_name(model);
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    format!("{base}{version}/{model}:{method}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_client_inner, test_client_inner_with_base};

    #[test]
    fn test_transform_model_name() {
        assert_eq!(
            transform_model_name("gemini-2.5-flash-image"),
            "models/gemini-2.5-flash-image"
        );
        assert_eq!(
            transform_model_name("models/gemini-2.5-flash-image"),
            "models/gemini-2.5-flash-image"
        );
    }

    #[test]
    fn test_build_model_method_url() {
        let inner = test_client_inner();
        let url = build_model_method_url(&inner, "gemini-2.5-flash-image", "generateContent");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }

    #[test]
    fn test_build_model_method_url_with_overrides() {
        let inner = test_client_inner_with_base("https://example.com/", "v1");
        let url = build_model_method_url(&inner, "gemini-3-pro-image-preview", "generateContent");
        assert_eq!(
            url,
            "https://example.com/v1/models/gemini-3-pro-image-preview:generateContent"
        );
    }
}
