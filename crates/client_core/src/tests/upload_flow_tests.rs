use std::time::Duration;

use shared::domain::{AuctionSource, ResultSummary, MAX_UPLOAD_BYTES, PDF_MIME_TYPE};

use super::*;

const SCAN_URL: &str = "https://auction.example/lot/42";

fn pdf(size_bytes: u64) -> UploadCandidate {
    UploadCandidate::new("lot-42.pdf", PDF_MIME_TYPE, size_bytes)
}

fn scheduled(intents: &[UiIntent]) -> Vec<(Duration, FlowTimer)> {
    intents
        .iter()
        .filter_map(|intent| match intent {
            UiIntent::Schedule { delay, timer } => Some((*delay, *timer)),
            _ => None,
        })
        .collect()
}

fn ready_flow() -> UploadFlow {
    let mut flow = UploadFlow::new(FlowSettings::default());
    flow.submit_url(SCAN_URL, true).expect("url accepted");
    flow
}

fn uploading_flow() -> (UploadFlow, FlowTimer) {
    let mut flow = ready_flow();
    flow.select_file(Some(pdf(1024 * 1024))).expect("pdf accepted");
    let intents = flow.confirm_upload();
    let (_, timer) = scheduled(&intents)[0];
    (flow, timer)
}

#[test]
fn invalid_urls_never_leave_idle() {
    for raw in ["", "   ", "auction.example", "lot 42", "mailto:x@y.com", "http://"] {
        let mut flow = UploadFlow::new(FlowSettings::default());
        let result = flow.submit_url(raw, true);
        assert!(result.is_err(), "{raw:?} should be rejected");
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.scan_request(), None);
    }
}

#[test]
fn empty_and_malformed_urls_are_distinguished() {
    let mut flow = UploadFlow::new(FlowSettings::default());
    assert_eq!(flow.submit_url("  ", false), Err(UrlError::EmptyUrl));
    assert_eq!(
        flow.submit_url("auction.example/lot/42", false),
        Err(UrlError::MalformedUrl)
    );
}

#[test]
fn url_without_session_waits_for_auth() {
    let mut flow = UploadFlow::new(FlowSettings::default());
    let intents = flow.submit_url("  https://auction.example/lot/42 ", false).expect("accepted");

    assert_eq!(flow.state(), FlowState::AwaitingAuth);
    assert_eq!(flow.scan_request().map(|s| s.url.as_str()), Some(SCAN_URL));
    assert!(!intents.contains(&UiIntent::show(Section::PdfUpload)));

    let intents = flow.auth_succeeded();
    assert_eq!(flow.state(), FlowState::ReadyToUpload);
    assert!(intents.contains(&UiIntent::show(Section::PdfUpload)));
}

#[test]
fn url_with_session_goes_straight_to_upload() {
    let flow = ready_flow();
    assert_eq!(flow.state(), FlowState::ReadyToUpload);
}

#[test]
fn second_url_submission_is_ignored_outside_idle() {
    let mut flow = ready_flow();
    let intents = flow
        .submit_url("https://other.example", true)
        .expect("ignored");
    assert!(intents.is_empty());
    assert_eq!(flow.scan_request().map(|s| s.url.as_str()), Some(SCAN_URL));
}

#[test]
fn file_acceptance_depends_only_on_type_and_size() {
    let cases = [
        (PDF_MIME_TYPE, 0, None),
        (PDF_MIME_TYPE, MAX_UPLOAD_BYTES, None),
        (PDF_MIME_TYPE, MAX_UPLOAD_BYTES + 1, Some(FileError::FileTooLarge)),
        (PDF_MIME_TYPE, 60_000_000, Some(FileError::FileTooLarge)),
        ("image/png", 10, Some(FileError::NotAPdf)),
        ("image/png", MAX_UPLOAD_BYTES + 1, Some(FileError::NotAPdf)),
        ("", 10, Some(FileError::NotAPdf)),
    ];

    for (mime, size, expected) in cases {
        let mut flow = ready_flow();
        let result = flow.select_file(Some(UploadCandidate::new("doc", mime, size)));
        match expected {
            None => {
                assert!(result.is_ok(), "{mime} {size}");
                assert_eq!(flow.state(), FlowState::FileSelected);
                assert!(flow.candidate().is_some());
            }
            Some(err) => {
                assert_eq!(result, Err(err), "{mime} {size}");
                assert_eq!(flow.state(), FlowState::ReadyToUpload);
                assert_eq!(flow.candidate(), None);
            }
        }
    }
}

#[test]
fn rejected_reselection_keeps_previous_candidate() {
    let mut flow = ready_flow();
    flow.select_file(Some(pdf(100))).expect("first pick");

    let result = flow.select_file(Some(UploadCandidate::new("photo.png", "image/png", 5)));
    assert_eq!(result, Err(FileError::NotAPdf));
    assert_eq!(flow.state(), FlowState::FileSelected);
    assert_eq!(flow.candidate(), Some(&pdf(100)));

    flow.select_file(Some(pdf(200))).expect("valid pick replaces");
    assert_eq!(flow.candidate(), Some(&pdf(200)));
}

#[test]
fn dismissed_picker_is_a_no_op() {
    let mut flow = ready_flow();
    assert_eq!(flow.select_file(None), Ok(Vec::new()));
    assert_eq!(flow.state(), FlowState::ReadyToUpload);
}

#[test]
fn file_selection_before_url_is_ignored() {
    let mut flow = UploadFlow::new(FlowSettings::default());
    assert_eq!(flow.select_file(Some(pdf(10))), Ok(Vec::new()));
    assert_eq!(flow.candidate(), None);
}

#[test]
fn confirm_disables_control_and_schedules_upload() {
    let mut flow = ready_flow();
    flow.select_file(Some(pdf(10))).expect("pdf");

    let intents = flow.confirm_upload();
    assert_eq!(flow.state(), FlowState::Uploading);
    assert!(intents.contains(&UiIntent::SetUploadControl(UploadControl {
        enabled: false,
        label: "Processing...".into(),
    })));
    assert_eq!(
        scheduled(&intents),
        vec![(
            Duration::from_millis(2000),
            FlowTimer {
                kind: TimerKind::UploadFinished,
                generation: 0,
            }
        )]
    );
}

#[test]
fn confirm_without_candidate_does_nothing() {
    let mut flow = ready_flow();
    assert!(flow.confirm_upload().is_empty());
    assert_eq!(flow.state(), FlowState::ReadyToUpload);
}

#[test]
fn timers_walk_through_upload_and_processing() {
    let (mut flow, upload_timer) = uploading_flow();

    let intents = flow.timer_elapsed(upload_timer);
    assert_eq!(flow.state(), FlowState::Processed(ProcessedStage::Uploaded));
    assert!(intents.contains(&UiIntent::AppendNotice(
        "✓ lot-42.pdf uploaded successfully! Processing your auction data...".into()
    )));
    assert!(intents.contains(&UiIntent::SetUploadControl(UploadControl {
        enabled: true,
        label: "Upload PDF".into(),
    })));
    assert!(flow.candidate().is_some());

    let (delay, processing_timer) = scheduled(&intents)[0];
    assert_eq!(delay, Duration::from_millis(1500));

    let intents = flow.timer_elapsed(processing_timer);
    assert_eq!(flow.state(), FlowState::Processed(ProcessedStage::Results));
    assert_eq!(
        intents,
        vec![UiIntent::RenderResults(ResultSummary {
            url: SCAN_URL.into(),
            status: "✓ Successfully processed".into(),
            items_found: "5-10 items detected".into(),
            processing_time: "~2 seconds".into(),
            source: AuctionSource::Unknown,
        })]
    );
}

#[test]
fn timer_for_wrong_stage_is_ignored() {
    let (mut flow, upload_timer) = uploading_flow();
    let early = FlowTimer {
        kind: TimerKind::ProcessingFinished,
        generation: upload_timer.generation,
    };
    assert!(flow.timer_elapsed(early).is_empty());
    assert_eq!(flow.state(), FlowState::Uploading);
}

#[test]
fn reset_during_upload_discards_pending_timer() {
    let (mut flow, upload_timer) = uploading_flow();
    flow.reset();

    assert!(flow.timer_elapsed(upload_timer).is_empty());
    assert_eq!(flow.state(), FlowState::Idle);

    // A fresh cycle in the same state must not pick up the old timer either.
    flow.submit_url(SCAN_URL, true).expect("url");
    flow.select_file(Some(pdf(10))).expect("pdf");
    flow.confirm_upload();
    assert!(flow.timer_elapsed(upload_timer).is_empty());
    assert_eq!(flow.state(), FlowState::Uploading);
}

#[test]
fn reset_is_idempotent() {
    let (mut flow, upload_timer) = uploading_flow();
    let processing = flow.timer_elapsed(upload_timer);
    flow.timer_elapsed(scheduled(&processing)[0].1);
    assert_eq!(flow.state(), FlowState::Processed(ProcessedStage::Results));

    let first = flow.reset();
    let second = flow.reset();

    assert_eq!(first, second);
    assert_eq!(flow.state(), FlowState::Idle);
    assert_eq!(flow.scan_request(), None);
    assert_eq!(flow.candidate(), None);
    assert!(first.contains(&UiIntent::ClearInputs));
    assert!(first.contains(&UiIntent::show(Section::UrlInput)));
    assert!(first.contains(&UiIntent::hide(Section::PdfUpload)));
}

#[test]
fn feedback_placeholder_only_on_results() {
    let (mut flow, upload_timer) = uploading_flow();
    assert_eq!(flow.view_feedback(), None);

    let processing = flow.timer_elapsed(upload_timer);
    flow.timer_elapsed(scheduled(&processing)[0].1);

    assert_eq!(
        flow.view_feedback(),
        Some(UiIntent::Notify(FEEDBACK_PLACEHOLDER.into()))
    );
    assert_eq!(flow.state(), FlowState::Processed(ProcessedStage::Results));
}

#[test]
fn results_use_configured_figures_and_detected_source() {
    let mut settings = FlowSettings::default();
    settings.results.items_found = "12 items detected".into();
    let mut flow = UploadFlow::new(settings);

    flow.submit_url("https://www.copart.com/lot/42", true).expect("url");
    flow.select_file(Some(pdf(10))).expect("pdf");
    let intents = flow.confirm_upload();
    let processing = flow.timer_elapsed(scheduled(&intents)[0].1);
    let intents = flow.timer_elapsed(scheduled(&processing)[0].1);

    match intents.as_slice() {
        [UiIntent::RenderResults(summary)] => {
            assert_eq!(summary.items_found, "12 items detected");
            assert_eq!(summary.source, AuctionSource::Copart);
        }
        other => panic!("unexpected intents: {other:?}"),
    }
}
