use shared::{
    domain::{AuthPanel, ResultSummary, Section, UserSession},
    error::ErrorBanner,
};

use crate::{
    intents::UploadControl,
    validators::{PasswordMatch, PasswordStrength},
};

/// Rendering surface the controller drives. Implementations own every
/// widget; the flows never touch one directly.
pub trait Presenter {
    fn show_error(&mut self, banner: ErrorBanner, message: &str);
    fn hide_error(&mut self, banner: ErrorBanner);
    /// For [`Section::UrlInput`], `false` dims the section and blocks input
    /// instead of hiding it.
    fn set_section_visible(&mut self, section: Section, visible: bool);
    fn show_welcome(&mut self, session: &UserSession);
    fn hide_welcome(&mut self);
    /// `None` clears the indicator (empty password field).
    fn set_password_strength(&mut self, strength: Option<PasswordStrength>);
    fn set_password_match(&mut self, state: PasswordMatch);
    fn set_file_label(&mut self, label: Option<&str>);
    fn set_upload_control(&mut self, control: &UploadControl);
    fn append_notice(&mut self, notice: &str);
    fn render_results(&mut self, summary: &ResultSummary);
    /// Puts the upload widgets back after the results panel replaced them.
    fn restore_upload_panel(&mut self);
    fn clear_form(&mut self, panel: AuthPanel);
    fn clear_inputs(&mut self);
    fn notify(&mut self, message: &str);
}
