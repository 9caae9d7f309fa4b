use serde::{Deserialize, Serialize};

use crate::content::{Content, Part, Role};

/// Model identifier for the standard-resolution image model.
pub const STANDARD_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Model identifier for the high-resolution image model.
pub const HIGH_RES_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Aspect ratio requested for every composited image.
pub const SQUARE_ASPECT_RATIO: &str = "1:1";

/// Wire body for `models/<id>:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Generation options; only the image subset is used by this client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<Modality>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

/// Response modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    Text,
    Image,
}

/// Image-specific generation options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
}

/// Output resolution accepted by the high-resolution model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

/// One built generation request, tagged per model so the resolution hint is
/// only representable where the model accepts it.
#[derive(Debug, Clone)]
pub enum GenerationRequest {
    /// Standard model; the provider rejects an image size here, so the
    /// variant cannot carry one.
    Standard(StandardImageRequest),
    /// High-resolution model with an explicit output size.
    HighRes(HighResImageRequest),
}

/// Request payload for the standard image model.
#[derive(Debug, Clone)]
pub struct StandardImageRequest {
    pub parts: Vec<Part>,
    pub aspect_ratio: String,
}

/// Request payload for the high-resolution image model.
#[derive(Debug, Clone)]
pub struct HighResImageRequest {
    pub parts: Vec<Part>,
    pub aspect_ratio: String,
    pub image_size: ImageSize,
}

impl GenerationRequest {
    /// Remote model identifier for this request.
    #[must_use]
    pub const fn model_id(&self) -> &'static str {
        match self {
            Self::Standard(_) => STANDARD_IMAGE_MODEL,
            Self::HighRes(_) => HIGH_RES_IMAGE_MODEL,
        }
    }

    /// Ordered request parts.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        match self {
            Self::Standard(request) => &request.parts,
            Self::HighRes(request) => &request.parts,
        }
    }

    /// Lower into the wire body.
    #[must_use]
    pub fn into_body(self) -> GenerateContentRequest {
        let (parts, aspect_ratio, image_size) = match self {
            Self::Standard(request) => (request.parts, request.aspect_ratio, None),
            Self::HighRes(request) => (
                request.parts,
                request.aspect_ratio,
                Some(request.image_size),
            ),
        };
        GenerateContentRequest {
            contents: vec![Content::from_parts(parts, Role::User)],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec![Modality::Text, Modality::Image]),
                image_config: Some(ImageConfig {
                    aspect_ratio: Some(aspect_ratio),
                    image_size,
                }),
            }),
        }
    }
}
