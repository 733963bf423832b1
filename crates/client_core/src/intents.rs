//! Presentation and scheduling instructions emitted by the flows.

use std::time::Duration;

use shared::{
    domain::{AuthPanel, ResultSummary, Section},
    error::ErrorBanner,
};

use crate::validators::{PasswordMatch, PasswordStrength};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    UploadFinished,
    ProcessingFinished,
    UrlErrorExpired,
}

/// A delayed transition, tagged with the generation it was scheduled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimer {
    pub kind: TimerKind,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadControl {
    pub enabled: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    SetSectionVisible { section: Section, visible: bool },
    ShowError { banner: ErrorBanner, message: String },
    HideError(ErrorBanner),
    SetPasswordStrength(Option<PasswordStrength>),
    SetPasswordMatch(PasswordMatch),
    SetFileLabel(Option<String>),
    SetUploadControl(UploadControl),
    AppendNotice(String),
    RenderResults(ResultSummary),
    RestoreUploadPanel,
    ClearForm(AuthPanel),
    ClearInputs,
    Notify(String),
    Schedule { delay: Duration, timer: FlowTimer },
}

impl UiIntent {
    pub fn show(section: Section) -> Self {
        UiIntent::SetSectionVisible {
            section,
            visible: true,
        }
    }

    pub fn hide(section: Section) -> Self {
        UiIntent::SetSectionVisible {
            section,
            visible: false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UiIntent::SetSectionVisible { .. } => "set_section_visible",
            UiIntent::ShowError { .. } => "show_error",
            UiIntent::HideError(_) => "hide_error",
            UiIntent::SetPasswordStrength(_) => "set_password_strength",
            UiIntent::SetPasswordMatch(_) => "set_password_match",
            UiIntent::SetFileLabel(_) => "set_file_label",
            UiIntent::SetUploadControl(_) => "set_upload_control",
            UiIntent::AppendNotice(_) => "append_notice",
            UiIntent::RenderResults(_) => "render_results",
            UiIntent::RestoreUploadPanel => "restore_upload_panel",
            UiIntent::ClearForm(_) => "clear_form",
            UiIntent::ClearInputs => "clear_inputs",
            UiIntent::Notify(_) => "notify",
            UiIntent::Schedule { .. } => "schedule",
        }
    }
}
