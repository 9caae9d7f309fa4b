#![allow(dead_code)]

use serde_json::{json, Value};

use prodshot::Client;

/// A tiny valid product photo as an encoded image string.
pub const PRODUCT_IMAGE: &str = "data:image/png;base64,AAEC";

pub fn build_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

/// A successful generateContent response carrying one inline image.
pub fn inline_image_response(data_b64: &str) -> Value {
    json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "here is the composited shot"},
                        {"inlineData": {"mimeType": "image/png", "data": data_b64}}
                    ]
                }
            }
        ]
    })
}

/// A generateContent response with no image part.
pub fn text_only_response() -> Value {
    json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [{"text": "no image for you"}]
                }
            }
        ]
    })
}
