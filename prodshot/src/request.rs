//! Builds one provider request per generation iteration.

use prodshot_types::content::Part;
use prodshot_types::request::{
    GenerationRequest, HighResImageRequest, ImageSize, StandardImageRequest, SQUARE_ASPECT_RATIO,
};
use prodshot_types::run::{BackgroundSpec, QualityTier};

use crate::data_url::DataUrl;
use crate::error::{messages, Error, Result};

const UPLOADED_BACKGROUND_PHRASE: &str =
    "the style and environment suggested by the uploaded background image";

/// Build the request for variation `variation_index` of `total_variations`.
///
/// Pure: no side effects, no retained state. Part order is fixed to what the
/// remote model expects: product image, instruction text, then the optional
/// background reference image.
///
/// # Errors
/// Returns `Error::InvalidInput` with the field-specific user message when
/// the product image is missing, the background description is empty, or the
/// background reference image is missing; `Error::Parse` when an encoded
/// image string is malformed.
pub fn build_request(
    product_image: &str,
    background: &BackgroundSpec,
    quality: QualityTier,
    variation_index: usize,
    total_variations: usize,
) -> Result<GenerationRequest> {
    if product_image.trim().is_empty() {
        return Err(invalid_input(messages::MISSING_PRODUCT_IMAGE));
    }
    match background {
        BackgroundSpec::Text(text) if text.trim().is_empty() => {
            return Err(invalid_input(messages::MISSING_BACKGROUND_TEXT));
        }
        BackgroundSpec::UploadedImage(image) if image.trim().is_empty() => {
            return Err(invalid_input(messages::MISSING_BACKGROUND_IMAGE));
        }
        _ => {}
    }

    let product = DataUrl::parse(product_image)?;
    let prompt = build_prompt(background, variation_index, total_variations);

    let mut parts = vec![
        Part::inline_data(product.data, product.mime_type),
        Part::text(prompt),
    ];
    if let BackgroundSpec::UploadedImage(reference) = background {
        let reference = DataUrl::parse(reference)?;
        parts.push(Part::inline_data(reference.data, reference.mime_type));
    }

    // Only the high-resolution model accepts an output size; the standard
    // model variant cannot carry one.
    Ok(match quality {
        QualityTier::Ultra => GenerationRequest::HighRes(HighResImageRequest {
            parts,
            aspect_ratio: SQUARE_ASPECT_RATIO.to_string(),
            image_size: ImageSize::FourK,
        }),
        QualityTier::Standard | QualityTier::High => {
            GenerationRequest::Standard(StandardImageRequest {
                parts,
                aspect_ratio: SQUARE_ASPECT_RATIO.to_string(),
            })
        }
    })
}

fn invalid_input(message: &str) -> Error {
    Error::InvalidInput {
        message: message.to_string(),
    }
}

/// The instruction template with its five fixed directives. The background
/// line is the only substitution point; multi-image text runs get a
/// per-variation suffix so repeated prompts are not byte-identical. Uploaded
/// reference images are reused unchanged across variations.
fn build_prompt(
    background: &BackgroundSpec,
    variation_index: usize,
    total_variations: usize,
) -> String {
    let background_line = match background {
        BackgroundSpec::Text(text) if total_variations > 1 => format!(
            "{text} - variation {n}, slight camera angle shift, natural lighting changes.",
            n = variation_index + 1
        ),
        BackgroundSpec::Text(text) => text.clone(),
        BackgroundSpec::UploadedImage(_) => UPLOADED_BACKGROUND_PHRASE.to_string(),
    };

    format!(
        "TASK: Product Background Replacement for E-commerce.\n\
         INSTRUCTION:\n\
         1. KEEP THE PRODUCT IN THE PROVIDED IMAGE 100% IDENTICAL. Do not distort, change colors, logos, or shape.\n\
         2. REPLACE THE BACKGROUND COMPLETELY with: {background_line}.\n\
         3. Ensure professional commercial lighting: natural shadows under the product, correct highlights reflecting the new environment.\n\
         4. Style: High-end, clean, sharp, professional advertising photography.\n\
         5. Final output must be only the product perfectly integrated into the new scene."
    )
}
