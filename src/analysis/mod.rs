//! Crop quality analysis: image sources, the grading collaborator and the
//! simulator that drives the quality view.

pub mod simulator;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::error::HarvestError;
use crate::models::QualityResult;

pub use simulator::{AnalysisSimulator, AnalysisState};

/// Image handed to the grader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// File picked by the user; `mime` is sniffed for the preview line only.
    /// The bytes are shared so each grading run reuses the same buffer.
    Upload {
        path: PathBuf,
        bytes: Arc<[u8]>,
        mime: Option<&'static str>,
    },
    /// Built-in sample reference
    Sample { url: &'static str },
}

impl ImageSource {
    pub const SAMPLE_URL: &'static str =
        "https://images.unsplash.com/photo-1560493676-04071c5f467b?w=800";

    pub fn sample() -> Self {
        ImageSource::Sample {
            url: Self::SAMPLE_URL,
        }
    }

    /// Read an image from disk. Any file is accepted; only I/O failures are errors.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, HarvestError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| HarvestError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::from_bytes(path, bytes))
    }

    pub fn from_bytes(path: impl Into<PathBuf>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        let mime = sniff_mime(&bytes);
        ImageSource::Upload {
            path: path.into(),
            bytes,
            mime,
        }
    }

    /// One-line preview used by the quality view
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Upload { path, bytes, mime } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!(
                    "{} ({}, {})",
                    name,
                    mime.unwrap_or("unknown type"),
                    format_size(bytes.len())
                )
            }
            ImageSource::Sample { .. } => "Sample crop image".to_string(),
        }
    }
}

/// MIME type of the image format recognised from the leading bytes
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type())
}

fn format_size(len: usize) -> String {
    if len < 1024 {
        format!("{} B", len)
    } else if len < 1024 * 1024 {
        format!("{:.1} KB", len as f64 / 1024.0)
    } else {
        format!("{:.1} MB", len as f64 / (1024.0 * 1024.0))
    }
}

/// Inference collaborator that grades a crop image
#[async_trait]
pub trait QualityGrader: Send + Sync {
    async fn grade(&self, image: &ImageSource) -> Result<QualityResult, HarvestError>;

    /// How long a grading run is expected to take, if known
    fn expected_duration(&self) -> Option<Duration> {
        None
    }
}

/// Stand-in grader: waits a fixed delay and returns the same premium result
/// for every image.
#[derive(Debug, Clone)]
pub struct SimulatedGrader {
    delay: Duration,
}

impl SimulatedGrader {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(3000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGrader {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl QualityGrader for SimulatedGrader {
    async fn grade(&self, image: &ImageSource) -> Result<QualityResult, HarvestError> {
        debug!("Simulating analysis of {} for {:?}", image.describe(), self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(QualityResult::premium_sample())
    }

    fn expected_duration(&self) -> Option<Duration> {
        Some(self.delay)
    }
}
