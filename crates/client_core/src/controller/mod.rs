//! Controller layer: input events, flow transitions, and intent dispatch.

pub mod events;
pub mod orchestration;

use std::time::Duration;

use shared::{
    domain::{AuthPanel, FlowState, UserSession},
    error::{AuthError, ErrorBanner, FlowError},
};
use storage::SessionStore;
use tracing::{debug, info, warn};

use crate::{
    auth_flow::{AuthFlow, LoginForm, RegisterForm},
    config::FlowSettings,
    intents::{FlowTimer, TimerKind, UiIntent},
    presenter::Presenter,
    scheduler::Scheduler,
    upload_flow::UploadFlow,
};

use self::{events::UiEvent, orchestration::dispatch_intents};

/// Single owner of the visitor's session and both flows.
pub struct UiController<P, S> {
    sessions: SessionStore,
    current_user: Option<UserSession>,
    auth: AuthFlow,
    upload: UploadFlow,
    presenter: P,
    scheduler: S,
    url_error_display: Duration,
    url_error_generation: u64,
}

impl<P: Presenter, S: Scheduler> UiController<P, S> {
    pub fn new(sessions: SessionStore, settings: FlowSettings, presenter: P, scheduler: S) -> Self {
        Self {
            sessions,
            current_user: None,
            auth: AuthFlow::new(),
            url_error_display: settings.url_error_display,
            upload: UploadFlow::new(settings),
            presenter,
            scheduler,
            url_error_generation: 0,
        }
    }

    pub fn current_user(&self) -> Option<&UserSession> {
        self.current_user.as_ref()
    }

    pub fn flow_state(&self) -> FlowState {
        self.upload.state()
    }

    pub fn auth_panel(&self) -> AuthPanel {
        self.auth.panel()
    }

    pub fn upload(&self) -> &UploadFlow {
        &self.upload
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Restores a persisted session and greets the user; the flow stays `Idle`.
    pub async fn start(&mut self) {
        if let Some(session) = self.sessions.load().await {
            info!(email = %session.email, "restored session");
            self.presenter.show_welcome(&session);
            self.current_user = Some(session);
        }
    }

    pub async fn handle(&mut self, event: UiEvent) {
        debug!(
            event = event.name(),
            state = self.upload.state().label(),
            "handling ui event"
        );

        match event {
            UiEvent::ScanRequested { url } => self.scan(&url),
            UiEvent::ShowLoginPanel => {
                if self.auth_gate_open() {
                    let intents = self.auth.show_login_panel();
                    self.apply(intents);
                }
            }
            UiEvent::ShowRegisterPanel => {
                if self.auth_gate_open() {
                    let intents = self.auth.show_register_panel();
                    self.apply(intents);
                }
            }
            UiEvent::LoginSubmitted { email, password } => {
                if !self.auth_gate_open() {
                    return;
                }
                let result = self
                    .auth
                    .submit_login(
                        &self.sessions,
                        LoginForm {
                            email: &email,
                            password: &password,
                        },
                    )
                    .await;
                self.finish_auth(result);
            }
            UiEvent::RegisterSubmitted {
                email,
                phone,
                password,
                confirm,
            } => {
                if !self.auth_gate_open() {
                    return;
                }
                let result = self
                    .auth
                    .submit_register(
                        &self.sessions,
                        RegisterForm {
                            email: &email,
                            phone: &phone,
                            password: &password,
                            confirm: &confirm,
                        },
                    )
                    .await;
                self.finish_auth(result);
            }
            UiEvent::RegisterPasswordEdited { password } => {
                let intent = self.auth.password_feedback(&password);
                self.apply(vec![intent]);
            }
            UiEvent::RegisterConfirmEdited { password, confirm } => {
                let intent = self.auth.confirm_feedback(&password, &confirm);
                self.apply(vec![intent]);
            }
            UiEvent::FileChosen(file) => match self.upload.select_file(file) {
                Ok(intents) => self.apply(intents),
                Err(err) => self.report(err.into()),
            },
            UiEvent::UploadConfirmed => {
                let intents = self.upload.confirm_upload();
                self.apply(intents);
            }
            UiEvent::ProcessAnotherRequested => self.reset_flow(),
            UiEvent::ViewFeedbackRequested => {
                if let Some(intent) = self.upload.view_feedback() {
                    self.apply(vec![intent]);
                }
            }
            UiEvent::LogoutRequested => self.logout().await,
            UiEvent::TimerElapsed(timer) => self.timer_elapsed(timer),
        }
    }

    fn auth_gate_open(&self) -> bool {
        let open = self.upload.state() == FlowState::AwaitingAuth;
        if !open {
            debug!(state = self.upload.state().label(), "auth overlay is not open");
        }
        open
    }

    fn scan(&mut self, url: &str) {
        let before = self.upload.state();
        match self.upload.submit_url(url, self.current_user.is_some()) {
            Ok(mut intents) => {
                if before == FlowState::Idle && self.upload.state() == FlowState::AwaitingAuth {
                    intents.extend(self.auth.open());
                }
                self.apply(intents);
            }
            Err(err) => self.report(err.into()),
        }
    }

    fn finish_auth(&mut self, result: Result<UserSession, AuthError>) {
        match result {
            Ok(session) => {
                self.presenter.show_welcome(&session);
                self.current_user = Some(session);
                let mut intents = self.auth.close();
                intents.extend(self.upload.auth_succeeded());
                self.apply(intents);
            }
            Err(err) => self.report(err.into()),
        }
    }

    fn reset_flow(&mut self) {
        let was_gated = self.upload.state() == FlowState::AwaitingAuth;
        let mut intents = self.upload.reset();
        if was_gated {
            intents.extend(self.auth.close());
        }
        self.apply(intents);
    }

    pub async fn logout(&mut self) {
        if let Err(err) = self.sessions.clear().await {
            warn!(error = %err, "failed to clear persisted session");
        }
        if let Some(session) = self.current_user.take() {
            info!(email = %session.email, "signed out");
        }
        self.presenter.hide_welcome();
        self.reset_flow();
    }

    fn timer_elapsed(&mut self, timer: FlowTimer) {
        if timer.kind == TimerKind::UrlErrorExpired {
            if timer.generation == self.url_error_generation {
                self.presenter.hide_error(ErrorBanner::Url);
            } else {
                debug!(?timer, "url error was replaced; keeping it visible");
            }
            return;
        }

        let intents = self.upload.timer_elapsed(timer);
        self.apply(intents);
    }

    fn report(&mut self, err: FlowError) {
        info!(code = ?err.code(), state = self.upload.state().label(), "input rejected");

        let mut intents = vec![UiIntent::ShowError {
            banner: err.banner(),
            message: err.to_string(),
        }];
        if err.auto_dismisses() {
            self.url_error_generation = self.url_error_generation.wrapping_add(1);
            intents.push(UiIntent::Schedule {
                delay: self.url_error_display,
                timer: FlowTimer {
                    kind: TimerKind::UrlErrorExpired,
                    generation: self.url_error_generation,
                },
            });
        }
        self.apply(intents);
    }

    fn apply(&mut self, intents: Vec<UiIntent>) {
        dispatch_intents(&mut self.presenter, &mut self.scheduler, intents);
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
