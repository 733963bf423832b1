use std::{
    collections::HashSet,
    fmt,
    io::{self, Write},
};

use client_core::{
    validators::{PasswordMatch, PasswordStrength},
    Presenter, UploadControl,
};
use shared::{
    domain::{AuthPanel, ResultSummary, Section, UserSession},
    error::ErrorBanner,
};
use tracing::warn;

/// Renders presenter calls as plain text lines. Only changes that a visitor
/// would notice on the page are printed.
pub struct ConsolePresenter<W> {
    out: W,
    visible: HashSet<Section>,
}

impl ConsolePresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            visible: HashSet::from([Section::UrlInput, Section::OriginalButton, Section::LoginPanel]),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{args}").and_then(|_| self.out.flush()) {
            warn!(error = %err, "failed to write console output");
        }
    }
}

fn banner_tag(banner: ErrorBanner) -> &'static str {
    match banner {
        ErrorBanner::Url => "url",
        ErrorBanner::File => "file",
        ErrorBanner::Auth => "auth",
    }
}

fn section_label(section: Section) -> &'static str {
    match section {
        Section::UrlInput => "url input",
        Section::PdfUpload => "pdf upload",
        Section::AuthOverlay => "sign-in overlay",
        Section::LoginPanel => "login form",
        Section::RegisterPanel => "register form",
        Section::UploadButton => "upload button",
        Section::OriginalButton => "upload controls",
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_error(&mut self, banner: ErrorBanner, message: &str) {
        self.line(format_args!("[{} error] {message}", banner_tag(banner)));
    }

    fn hide_error(&mut self, banner: ErrorBanner) {
        self.line(format_args!("[{} error cleared]", banner_tag(banner)));
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        let changed = if visible {
            self.visible.insert(section)
        } else {
            self.visible.remove(&section)
        };
        if !changed {
            return;
        }

        let label = section_label(section);
        match (section, visible) {
            (Section::UrlInput, false) => self.line(format_args!("  ({label} locked)")),
            (Section::UrlInput, true) => self.line(format_args!("  ({label} unlocked)")),
            (_, true) => self.line(format_args!("  [+] {label}")),
            (_, false) => self.line(format_args!("  [-] {label}")),
        }
    }

    fn show_welcome(&mut self, session: &UserSession) {
        self.line(format_args!("Welcome, {}", session.display_name()));
    }

    fn hide_welcome(&mut self) {
        self.line(format_args!("Signed out"));
    }

    fn set_password_strength(&mut self, strength: Option<PasswordStrength>) {
        match strength {
            Some(strength) => self.line(format_args!(
                "  strength: {} ({}/5)",
                strength.label(),
                strength.score()
            )),
            None => self.line(format_args!("  strength: -")),
        }
    }

    fn set_password_match(&mut self, state: PasswordMatch) {
        if state != PasswordMatch::Neutral {
            self.line(format_args!("  {}", state.message()));
        }
    }

    fn set_file_label(&mut self, label: Option<&str>) {
        match label {
            Some(label) => self.line(format_args!("{label}")),
            None => self.line(format_args!("No file selected")),
        }
    }

    fn set_upload_control(&mut self, control: &UploadControl) {
        let state = if control.enabled { "ready" } else { "busy" };
        self.line(format_args!("  [{}] ({state})", control.label));
    }

    fn append_notice(&mut self, notice: &str) {
        self.line(format_args!("{notice}"));
    }

    fn render_results(&mut self, summary: &ResultSummary) {
        self.line(format_args!("--- Scan Results ---"));
        self.line(format_args!("URL:             {}", summary.url));
        self.line(format_args!("Source:          {}", summary.source.label()));
        self.line(format_args!("Status:          {}", summary.status));
        self.line(format_args!("Items found:     {}", summary.items_found));
        self.line(format_args!("Processing time: {}", summary.processing_time));
        self.line(format_args!("(again: process another | feedback: view feedback)"));
    }

    fn restore_upload_panel(&mut self) {
        self.line(format_args!("  results cleared"));
    }

    fn clear_form(&mut self, panel: AuthPanel) {
        tracing::debug!(?panel, "auth form cleared");
    }

    fn clear_inputs(&mut self) {
        tracing::debug!("url and file inputs cleared");
    }

    fn notify(&mut self, message: &str) {
        self.line(format_args!("(i) {message}"));
    }
}
