//! Input events routed into the controller.

use shared::domain::UploadCandidate;

use crate::intents::FlowTimer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Scan button or Enter in the URL field.
    ScanRequested {
        url: String,
    },
    ShowLoginPanel,
    ShowRegisterPanel,
    LoginSubmitted {
        email: String,
        password: String,
    },
    RegisterSubmitted {
        email: String,
        phone: String,
        password: String,
        confirm: String,
    },
    RegisterPasswordEdited {
        password: String,
    },
    RegisterConfirmEdited {
        password: String,
        confirm: String,
    },
    FileChosen(Option<UploadCandidate>),
    UploadConfirmed,
    ProcessAnotherRequested,
    ViewFeedbackRequested,
    LogoutRequested,
    TimerElapsed(FlowTimer),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::ScanRequested { .. } => "scan_requested",
            UiEvent::ShowLoginPanel => "show_login_panel",
            UiEvent::ShowRegisterPanel => "show_register_panel",
            UiEvent::LoginSubmitted { .. } => "login_submitted",
            UiEvent::RegisterSubmitted { .. } => "register_submitted",
            UiEvent::RegisterPasswordEdited { .. } => "register_password_edited",
            UiEvent::RegisterConfirmEdited { .. } => "register_confirm_edited",
            UiEvent::FileChosen(_) => "file_chosen",
            UiEvent::UploadConfirmed => "upload_confirmed",
            UiEvent::ProcessAnotherRequested => "process_another_requested",
            UiEvent::ViewFeedbackRequested => "view_feedback_requested",
            UiEvent::LogoutRequested => "logout_requested",
            UiEvent::TimerElapsed(_) => "timer_elapsed",
        }
    }
}
