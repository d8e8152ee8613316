//! Analysis simulator integration tests

use assert_matches::assert_matches;
use async_trait::async_trait;
use mockall::{mock, Sequence};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

use crate::common::{logging, test_data};
use harvest_flow::analysis::{AnalysisSimulator, AnalysisState, ImageSource, QualityGrader, SimulatedGrader};
use harvest_flow::error::HarvestError;
use harvest_flow::models::{Grade, QualityResult};

mock! {
    pub Grader {}

    #[async_trait]
    impl QualityGrader for Grader {
        async fn grade(&self, image: &ImageSource) -> Result<QualityResult, HarvestError>;
        fn expected_duration(&self) -> Option<Duration>;
    }
}

fn simulated() -> AnalysisSimulator {
    AnalysisSimulator::new(Arc::new(SimulatedGrader::default()))
}

/// Let spawned grading tasks run until they block
async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_select_image_is_pending_then_complete() {
    logging::log_test_step("Sample image completes after the fixed delay");
    let mut simulator = simulated();

    simulator.select_image(ImageSource::sample());
    assert!(simulator.state().is_pending());
    assert_eq!(simulator.progress(), Some(0.0));
    settle().await;

    tokio::time::advance(Duration::from_millis(2999)).await;
    settle().await;
    assert!(!simulator.process_updates());
    assert!(simulator.state().is_pending());
    assert_eq!(simulator.revealed_steps().len(), 4);

    assert!(simulator.wait_for_update().await);
    let result = simulator.state().result().expect("analysis should be complete");
    assert_eq!(result.grade, Grade::APlus);
    assert_eq!(result.grade.to_string(), "A+");
    assert_eq!(result.score, 96);
    assert_eq!(simulator.state().image(), Some(&ImageSource::sample()));
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_result_does_not_depend_on_image() {
    let file = test_data::create_temp_image(test_data::PNG_BYTES);
    let upload = ImageSource::from_path(file.path()).await.unwrap();
    logging::log_test_data("Upload", &upload.describe());
    assert!(upload.describe().contains("image/png"));

    let mut simulator = simulated();
    simulator.select_image(upload);
    assert!(simulator.wait_for_update().await);

    assert_eq!(simulator.state().result(), Some(&QualityResult::premium_sample()));
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_remove_while_pending_cancels_completion() {
    let mut simulator = simulated();
    simulator.select_image(ImageSource::sample());
    settle().await;

    simulator.remove_image();
    assert_eq!(simulator.state(), &AnalysisState::Idle);

    tokio::time::advance(Duration::from_secs(10)).await;
    settle().await;

    assert!(!simulator.process_updates());
    assert!(!simulator.wait_for_update().await);
    assert_eq!(simulator.state(), &AnalysisState::Idle);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_remove_while_idle_is_noop() {
    let mut simulator = simulated();
    simulator.remove_image();
    assert_eq!(simulator.state(), &AnalysisState::Idle);
    assert_eq!(simulator.progress(), None);
    assert!(simulator.revealed_steps().is_empty());
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_remove_after_complete_returns_to_idle() {
    let mut simulator = simulated();
    simulator.select_image(ImageSource::sample());
    assert!(simulator.wait_for_update().await);

    simulator.remove_image();
    assert_eq!(simulator.state(), &AnalysisState::Idle);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_reselect_restarts_timer() {
    let mut simulator = simulated();
    simulator.select_image(ImageSource::sample());
    settle().await;

    tokio::time::advance(Duration::from_millis(2000)).await;
    settle().await;

    let upload = ImageSource::from_bytes("second.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0]);
    simulator.select_image(upload.clone());
    settle().await;

    // The first run would have finished here
    tokio::time::advance(Duration::from_millis(1500)).await;
    settle().await;
    assert!(!simulator.process_updates());
    assert_eq!(simulator.state().image(), Some(&upload));
    assert!(simulator.state().is_pending());

    assert!(simulator.wait_for_update().await);
    assert_eq!(simulator.state().image(), Some(&upload));
    assert!(simulator.state().result().is_some());
}

#[test_log::test(tokio::test)]
async fn test_stale_outcome_is_dropped() {
    let mut grader = MockGrader::new();
    grader
        .expect_grade()
        .times(2)
        .returning(|_| Ok(QualityResult::premium_sample()));
    let mut simulator = AnalysisSimulator::new(Arc::new(grader));

    // First run finishes and posts its outcome before being replaced
    simulator.select_image(ImageSource::sample());
    settle().await;
    let upload = ImageSource::from_bytes("late.png", test_data::PNG_BYTES.to_vec());
    simulator.select_image(upload.clone());

    settle().await;
    assert!(simulator.process_updates());
    assert_matches!(simulator.state(), AnalysisState::Complete { image, .. } if *image == upload);
}

#[test_log::test(tokio::test)]
async fn test_failure_then_retry() {
    let mut seq = Sequence::new();
    let mut grader = MockGrader::new();
    grader
        .expect_grade()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(HarvestError::AnalysisFailed("model offline".to_string())));
    grader
        .expect_grade()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(QualityResult::premium_sample()));
    let mut simulator = AnalysisSimulator::new(Arc::new(grader));

    simulator.select_image(ImageSource::sample());
    assert!(simulator.wait_for_update().await);
    assert_matches!(
        simulator.state(),
        AnalysisState::Failed { message, .. } if message == "Analysis failed: model offline"
    );

    simulator.retry().unwrap();
    assert!(simulator.state().is_pending());
    assert!(simulator.wait_for_update().await);
    assert_eq!(simulator.state().result().map(|r| r.score), Some(96));
}

#[test_log::test(tokio::test)]
async fn test_retry_outside_failed_is_rejected() {
    let mut simulator = simulated();
    assert_matches!(
        simulator.retry(),
        Err(HarvestError::InvalidTransition { action: "retry", state: "idle" })
    );
    assert!(simulator.state().is_idle());
}

#[test_log::test(tokio::test)]
async fn test_unreadable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.jpg");
    assert_matches!(
        ImageSource::from_path(&missing).await,
        Err(HarvestError::ImageRead { path, .. }) if path == missing
    );
}

#[test_log::test(tokio::test)]
async fn test_retry_reuses_uploaded_bytes() {
    let mut grader = MockGrader::new();
    grader
        .expect_grade()
        .times(2)
        .returning(|_| Err(HarvestError::AnalysisFailed("model offline".to_string())));
    let mut simulator = AnalysisSimulator::new(Arc::new(grader));

    let upload = ImageSource::from_bytes("field.png", test_data::PNG_BYTES.to_vec());
    simulator.select_image(upload.clone());
    assert!(simulator.wait_for_update().await);
    simulator.retry().unwrap();

    match (simulator.state().image(), &upload) {
        (Some(ImageSource::Upload { bytes: live, .. }), ImageSource::Upload { bytes: original, .. }) => {
            assert!(Arc::ptr_eq(live, original));
        }
        other => panic!("expected an upload, got {:?}", other),
    }
    assert!(simulator.wait_for_update().await);
}
