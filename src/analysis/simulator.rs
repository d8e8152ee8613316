use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::{ImageSource, QualityGrader};
use crate::error::HarvestError;
use crate::models::QualityResult;

/// Progress captions shown while an analysis is pending
pub static ANALYSIS_STEPS: [&str; 4] = [
    "Detecting crop type...",
    "Analyzing color and ripeness...",
    "Detecting defects and blemishes...",
    "Calculating quality grade...",
];

/// Time between two captions being revealed
pub const STEP_INTERVAL: Duration = Duration::from_millis(500);

/// Captions revealed after `elapsed` time in the pending state
pub fn revealed_steps(elapsed: Duration) -> &'static [&'static str] {
    let count = (elapsed.as_millis() / STEP_INTERVAL.as_millis()) as usize;
    &ANALYSIS_STEPS[..count.min(ANALYSIS_STEPS.len())]
}

/// Analysis lifecycle of the quality view
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    /// No image selected
    Idle,
    /// Image selected, grading in flight
    Pending { image: ImageSource, started_at: Instant },
    /// Grading finished
    Complete { image: ImageSource, result: QualityResult },
    /// The grader reported an error; `retry` re-enters `Pending`
    Failed { image: ImageSource, message: String },
}

impl AnalysisState {
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Pending { .. } => "pending",
            AnalysisState::Complete { .. } => "complete",
            AnalysisState::Failed { .. } => "failed",
        }
    }

    pub fn image(&self) -> Option<&ImageSource> {
        match self {
            AnalysisState::Idle => None,
            AnalysisState::Pending { image, .. }
            | AnalysisState::Complete { image, .. }
            | AnalysisState::Failed { image, .. } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&QualityResult> {
        match self {
            AnalysisState::Complete { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, AnalysisState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisState::Pending { .. })
    }
}

/// Outcome posted by a grading task
#[derive(Debug)]
struct AnalysisOutcome {
    ticket: u64,
    result: Result<QualityResult, String>,
}

/// Handle of the grading task backing the current `Pending` state
#[derive(Debug)]
struct InFlight {
    ticket: u64,
    task: JoinHandle<()>,
}

/// Drives `Idle -> Pending -> Complete` for the quality view.
///
/// Grading runs on a spawned tokio task that reports back over a channel;
/// state is only mutated by the owner through `process_updates` or
/// `wait_for_update`. Every selection gets a fresh ticket and aborts the
/// previous task, and an outcome is applied only if its ticket is still the
/// live one, so a removed or replaced image can never be overwritten by a
/// late result.
pub struct AnalysisSimulator {
    grader: Arc<dyn QualityGrader>,
    state: AnalysisState,
    in_flight: Option<InFlight>,
    next_ticket: u64,
    outcome_sender: mpsc::Sender<AnalysisOutcome>,
    outcome_receiver: mpsc::Receiver<AnalysisOutcome>,
}

impl AnalysisSimulator {
    /// Create a simulator backed by `grader`
    pub fn new(grader: Arc<dyn QualityGrader>) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::channel::<AnalysisOutcome>(16);

        Self {
            grader,
            state: AnalysisState::Idle,
            in_flight: None,
            next_ticket: 0,
            outcome_sender,
            outcome_receiver,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Start grading `image`, discarding any previous result or in-flight run.
    ///
    /// Must be called from within a tokio runtime.
    pub fn select_image(&mut self, image: ImageSource) {
        self.cancel_in_flight();

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let grader = Arc::clone(&self.grader);
        let sender = self.outcome_sender.clone();
        let task_image = image.clone();

        let task = tokio::spawn(async move {
            let result = grader
                .grade(&task_image)
                .await
                .map_err(|e| e.to_string());
            let _ = sender.send(AnalysisOutcome { ticket, result }).await;
        });

        info!("🔬 Analysis #{} started: {}", ticket, image.describe());
        self.in_flight = Some(InFlight { ticket, task });
        self.state = AnalysisState::Pending {
            image,
            started_at: Instant::now(),
        };
    }

    /// Clear the image and any result. No-op when already idle.
    pub fn remove_image(&mut self) {
        if self.state.is_idle() {
            return;
        }
        self.cancel_in_flight();
        info!("🗑️ Image removed, analysis reset");
        self.state = AnalysisState::Idle;
    }

    /// Re-run grading for the image of a failed analysis
    pub fn retry(&mut self) -> Result<(), HarvestError> {
        match &self.state {
            AnalysisState::Failed { image, .. } => {
                let image = image.clone();
                self.select_image(image);
                Ok(())
            }
            other => Err(HarvestError::InvalidTransition {
                action: "retry",
                state: other.name(),
            }),
        }
    }

    /// Apply finished grading runs without blocking. Returns true if the state changed.
    pub fn process_updates(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Wait until the pending run finishes and apply it.
    ///
    /// Returns false immediately when nothing is in flight.
    pub async fn wait_for_update(&mut self) -> bool {
        while self.in_flight.is_some() {
            match self.outcome_receiver.recv().await {
                Some(outcome) => {
                    if self.apply(outcome) {
                        return true;
                    }
                }
                None => break,
            }
        }
        false
    }

    /// Time spent in the current `Pending` state
    pub fn elapsed(&self) -> Option<Duration> {
        match &self.state {
            AnalysisState::Pending { started_at, .. } => Some(started_at.elapsed()),
            _ => None,
        }
    }

    /// Fraction of the grader's expected duration elapsed, while pending
    pub fn progress(&self) -> Option<f64> {
        let elapsed = self.elapsed()?;
        let expected = self.grader.expected_duration()?;
        if expected.is_zero() {
            return Some(1.0);
        }
        Some((elapsed.as_secs_f64() / expected.as_secs_f64()).min(1.0))
    }

    /// Progress captions revealed so far, while pending
    pub fn revealed_steps(&self) -> &'static [&'static str] {
        self.elapsed().map(revealed_steps).unwrap_or(&[])
    }

    fn apply(&mut self, outcome: AnalysisOutcome) -> bool {
        let is_live = matches!(&self.in_flight, Some(in_flight) if in_flight.ticket == outcome.ticket);
        if !is_live {
            debug!("Dropping stale analysis outcome #{}", outcome.ticket);
            return false;
        }
        self.in_flight = None;

        let image = match std::mem::replace(&mut self.state, AnalysisState::Idle) {
            AnalysisState::Pending { image, .. } => image,
            other => {
                self.state = other;
                return false;
            }
        };

        self.state = match outcome.result {
            Ok(result) => {
                info!("✅ Analysis #{} complete: grade {} ({}/100)", outcome.ticket, result.grade, result.score);
                AnalysisState::Complete { image, result }
            }
            Err(message) => {
                warn!("❌ Analysis #{} failed: {}", outcome.ticket, message);
                AnalysisState::Failed { image, message }
            }
        };
        true
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
            debug!("Cancelled analysis #{}", in_flight.ticket);
        }
    }
}

impl Drop for AnalysisSimulator {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
