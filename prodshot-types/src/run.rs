use serde::{Deserialize, Serialize};

/// Quality tier selecting both the remote model and the requested output
/// resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityTier {
    #[default]
    Standard,
    High,
    Ultra,
}

impl QualityTier {
    /// Whether this tier requires the high-resolution model.
    #[must_use]
    pub const fn is_ultra(self) -> bool {
        matches!(self, Self::Ultra)
    }
}

/// How the desired background is specified: free text for the model to
/// interpret, or an uploaded reference image (as an encoded image string).
///
/// Folding the mode and its value into one enum makes "text mode without a
/// description" unrepresentable; emptiness after trimming is still checked
/// when a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundSpec {
    Text(String),
    UploadedImage(String),
}

impl BackgroundSpec {
    /// Background description when in text mode.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::UploadedImage(_) => None,
        }
    }
}

/// Number of images requested per run. Only these four counts are offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageCount {
    #[default]
    One,
    Two,
    Four,
    Eight,
}

impl ImageCount {
    /// Number of sequential generation requests this count stands for.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }
}

impl TryFrom<u8> for ImageCount {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            other => Err(other),
        }
    }
}

/// Everything a single run needs. Passed by value into the orchestrator and
/// not retained across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfiguration {
    /// Product photo as an encoded image string (`data:image/...;base64,`).
    pub product_image: String,
    pub background: BackgroundSpec,
    pub image_count: ImageCount,
    pub quality: QualityTier,
}

/// Run lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    #[default]
    Idle,
    Validating,
    Running,
    Completed,
    Failed,
}

/// Observable snapshot of a run. Mutated only by the orchestrator; observers
/// receive immutable copies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunState {
    pub phase: RunPhase,
    /// 0-100, non-decreasing within a run.
    pub progress_percent: u8,
    /// Encoded image strings in completion order; populated only on full
    /// success.
    pub results: Vec<String>,
    pub last_error: Option<String>,
}

impl RunState {
    /// Whether a run is currently in flight.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.phase, RunPhase::Validating | RunPhase::Running)
    }
}
