//! URL capture, file selection and the simulated upload/processing pipeline.

use shared::{
    domain::{FlowState, ProcessedStage, ScanRequest, Section, UploadCandidate},
    error::{ErrorBanner, FileError, UrlError},
};
use tracing::{debug, info};

use crate::{
    config::{FlowSettings, PROCESSING_LABEL},
    intents::{FlowTimer, TimerKind, UiIntent, UploadControl},
    validators::is_valid_url,
};

pub const FEEDBACK_PLACEHOLDER: &str =
    "Feedback generation feature - would show detailed analysis here";

#[derive(Debug)]
pub struct UploadFlow {
    settings: FlowSettings,
    state: FlowState,
    scan: Option<ScanRequest>,
    candidate: Option<UploadCandidate>,
    /// Bumped on every reset; timers scheduled under an older value are stale.
    generation: u64,
}

impl UploadFlow {
    pub fn new(settings: FlowSettings) -> Self {
        Self {
            settings,
            state: FlowState::Idle,
            scan: None,
            candidate: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn scan_request(&self) -> Option<&ScanRequest> {
        self.scan.as_ref()
    }

    pub fn candidate(&self) -> Option<&UploadCandidate> {
        self.candidate.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn enter(&mut self, next: FlowState) {
        debug!(from = self.state.label(), to = next.label(), "upload flow transition");
        self.state = next;
    }

    fn timer(&self, kind: TimerKind) -> FlowTimer {
        FlowTimer {
            kind,
            generation: self.generation,
        }
    }

    fn upload_section_intents() -> Vec<UiIntent> {
        vec![
            UiIntent::hide(Section::UrlInput),
            UiIntent::show(Section::PdfUpload),
            UiIntent::hide(Section::OriginalButton),
        ]
    }

    /// Only accepted from `Idle`; the URL section is disabled everywhere else.
    pub fn submit_url(&mut self, raw: &str, signed_in: bool) -> Result<Vec<UiIntent>, UrlError> {
        if self.state != FlowState::Idle {
            debug!(state = self.state.label(), "ignoring url submission");
            return Ok(Vec::new());
        }

        let url = raw.trim();
        if url.is_empty() {
            return Err(UrlError::EmptyUrl);
        }
        if !is_valid_url(url) {
            return Err(UrlError::MalformedUrl);
        }

        info!(%url, signed_in, "scan url accepted");
        self.scan = Some(ScanRequest {
            url: url.to_string(),
        });

        let mut intents = vec![UiIntent::HideError(ErrorBanner::Url)];
        if signed_in {
            self.enter(FlowState::ReadyToUpload);
            intents.extend(Self::upload_section_intents());
        } else {
            self.enter(FlowState::AwaitingAuth);
        }
        Ok(intents)
    }

    pub fn auth_succeeded(&mut self) -> Vec<UiIntent> {
        if self.state != FlowState::AwaitingAuth {
            debug!(state = self.state.label(), "ignoring auth success outside auth gate");
            return Vec::new();
        }
        self.enter(FlowState::ReadyToUpload);
        Self::upload_section_intents()
    }

    /// `None` means the picker was dismissed without a choice.
    pub fn select_file(
        &mut self,
        file: Option<UploadCandidate>,
    ) -> Result<Vec<UiIntent>, FileError> {
        if !matches!(
            self.state,
            FlowState::ReadyToUpload | FlowState::FileSelected
        ) {
            debug!(state = self.state.label(), "ignoring file selection");
            return Ok(Vec::new());
        }
        let Some(file) = file else {
            return Ok(Vec::new());
        };

        if !file.is_pdf() {
            return Err(FileError::NotAPdf);
        }
        if !file.fits_upload_limit() {
            return Err(FileError::FileTooLarge);
        }

        let label = format!("✓ {} selected", file.file_name);
        info!(file = %file.file_name, size_bytes = file.size_bytes, "upload candidate selected");
        self.candidate = Some(file);
        self.enter(FlowState::FileSelected);

        Ok(vec![
            UiIntent::HideError(ErrorBanner::File),
            UiIntent::SetFileLabel(Some(label)),
            UiIntent::show(Section::UploadButton),
        ])
    }

    pub fn confirm_upload(&mut self) -> Vec<UiIntent> {
        if self.state != FlowState::FileSelected || self.candidate.is_none() {
            debug!(state = self.state.label(), "ignoring upload confirmation");
            return Vec::new();
        }

        self.enter(FlowState::Uploading);
        vec![
            UiIntent::SetUploadControl(UploadControl {
                enabled: false,
                label: PROCESSING_LABEL.to_string(),
            }),
            UiIntent::Schedule {
                delay: self.settings.upload_delay,
                timer: self.timer(TimerKind::UploadFinished),
            },
        ]
    }

    pub fn timer_elapsed(&mut self, timer: FlowTimer) -> Vec<UiIntent> {
        if timer.generation != self.generation {
            debug!(?timer, current = self.generation, "dropping stale timer");
            return Vec::new();
        }

        match (timer.kind, self.state) {
            (TimerKind::UploadFinished, FlowState::Uploading) => self.finish_upload(),
            (TimerKind::ProcessingFinished, FlowState::Processed(ProcessedStage::Uploaded)) => {
                self.finish_processing()
            }
            (kind, state) => {
                debug!(?kind, state = state.label(), "timer does not apply to current state");
                Vec::new()
            }
        }
    }

    fn finish_upload(&mut self) -> Vec<UiIntent> {
        let file_name = self
            .candidate
            .as_ref()
            .map(|candidate| candidate.file_name.clone())
            .unwrap_or_default();

        self.enter(FlowState::Processed(ProcessedStage::Uploaded));
        vec![
            UiIntent::AppendNotice(format!(
                "✓ {file_name} uploaded successfully! Processing your auction data..."
            )),
            UiIntent::SetUploadControl(UploadControl {
                enabled: true,
                label: self.settings.upload_label.clone(),
            }),
            UiIntent::Schedule {
                delay: self.settings.processing_delay,
                timer: self.timer(TimerKind::ProcessingFinished),
            },
        ]
    }

    fn finish_processing(&mut self) -> Vec<UiIntent> {
        let Some(scan) = &self.scan else {
            debug!("processing finished without a scan request");
            return Vec::new();
        };

        let summary = self.settings.results.summarize(&scan.url);
        info!(url = %summary.url, source = summary.source.label(), "results ready");
        self.enter(FlowState::Processed(ProcessedStage::Results));
        vec![UiIntent::RenderResults(summary)]
    }

    /// Back to `Idle` from any state. Calling it again changes nothing.
    pub fn reset(&mut self) -> Vec<UiIntent> {
        self.generation = self.generation.wrapping_add(1);
        self.scan = None;
        self.candidate = None;
        self.enter(FlowState::Idle);

        vec![
            UiIntent::ClearInputs,
            UiIntent::SetFileLabel(None),
            UiIntent::HideError(ErrorBanner::File),
            UiIntent::RestoreUploadPanel,
            UiIntent::SetUploadControl(UploadControl {
                enabled: true,
                label: self.settings.upload_label.clone(),
            }),
            UiIntent::hide(Section::UploadButton),
            UiIntent::hide(Section::PdfUpload),
            UiIntent::show(Section::OriginalButton),
            UiIntent::show(Section::UrlInput),
        ]
    }

    pub fn view_feedback(&self) -> Option<UiIntent> {
        (self.state == FlowState::Processed(ProcessedStage::Results))
            .then(|| UiIntent::Notify(FEEDBACK_PLACEHOLDER.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/upload_flow_tests.rs"]
mod tests;
