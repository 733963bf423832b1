//! Login / registration overlay that gates the upload section.

use shared::{
    domain::{AuthPanel, Section, UserSession},
    error::{AuthError, ErrorBanner},
};
use storage::SessionStore;
use tracing::{info, warn};

use crate::{
    intents::UiIntent,
    validators::{
        is_strong_password_for_submit, is_valid_email, is_valid_phone, password_strength,
        passwords_match, PasswordMatch,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginForm<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterForm<'a> {
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
    pub confirm: &'a str,
}

/// Checks run in order; the first failure is the one reported.
pub fn validate_login(form: LoginForm<'_>) -> Result<UserSession, AuthError> {
    let email = form.email.trim();
    let password = form.password.trim();

    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(AuthError::InvalidEmail);
    }

    Ok(UserSession::for_email(email, None))
}

pub fn validate_register(form: RegisterForm<'_>) -> Result<UserSession, AuthError> {
    let email = form.email.trim();
    let phone = form.phone.trim();
    let password = form.password.trim();
    let confirm = form.confirm.trim();

    if email.is_empty() || phone.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(AuthError::InvalidEmail);
    }
    if !is_valid_phone(phone) {
        return Err(AuthError::InvalidPhone);
    }
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    if !is_strong_password_for_submit(password) {
        return Err(AuthError::WeakPassword);
    }

    Ok(UserSession::for_email(email, Some(phone.to_string())))
}

#[derive(Debug)]
pub struct AuthFlow {
    panel: AuthPanel,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFlow {
    pub fn new() -> Self {
        Self {
            panel: AuthPanel::Login,
        }
    }

    pub fn panel(&self) -> AuthPanel {
        self.panel
    }

    /// Shows the overlay, always starting on the login panel.
    pub fn open(&mut self) -> Vec<UiIntent> {
        let mut intents = vec![UiIntent::show(Section::AuthOverlay)];
        intents.extend(self.show_login_panel());
        intents
    }

    pub fn show_login_panel(&mut self) -> Vec<UiIntent> {
        self.panel = AuthPanel::Login;
        vec![
            UiIntent::show(Section::LoginPanel),
            UiIntent::hide(Section::RegisterPanel),
        ]
    }

    pub fn show_register_panel(&mut self) -> Vec<UiIntent> {
        self.panel = AuthPanel::Register;
        vec![
            UiIntent::hide(Section::LoginPanel),
            UiIntent::show(Section::RegisterPanel),
        ]
    }

    pub fn close(&mut self) -> Vec<UiIntent> {
        self.panel = AuthPanel::Login;
        vec![
            UiIntent::hide(Section::AuthOverlay),
            UiIntent::HideError(ErrorBanner::Auth),
            UiIntent::ClearForm(AuthPanel::Login),
            UiIntent::ClearForm(AuthPanel::Register),
            UiIntent::SetPasswordStrength(None),
            UiIntent::SetPasswordMatch(PasswordMatch::Neutral),
        ]
    }

    pub async fn submit_login(
        &self,
        sessions: &SessionStore,
        form: LoginForm<'_>,
    ) -> Result<UserSession, AuthError> {
        let session = validate_login(form)?;
        persist(sessions, &session).await;
        info!(email = %session.email, "signed in");
        Ok(session)
    }

    pub async fn submit_register(
        &self,
        sessions: &SessionStore,
        form: RegisterForm<'_>,
    ) -> Result<UserSession, AuthError> {
        let session = validate_register(form)?;
        persist(sessions, &session).await;
        info!(email = %session.email, "registered");
        Ok(session)
    }

    /// Recomputed on every keystroke in the password field.
    pub fn password_feedback(&self, password: &str) -> UiIntent {
        if password.is_empty() {
            UiIntent::SetPasswordStrength(None)
        } else {
            UiIntent::SetPasswordStrength(Some(password_strength(password)))
        }
    }

    /// Recomputed on every keystroke in the confirm field.
    pub fn confirm_feedback(&self, password: &str, confirm: &str) -> UiIntent {
        UiIntent::SetPasswordMatch(passwords_match(password, confirm))
    }
}

async fn persist(sessions: &SessionStore, session: &UserSession) {
    if let Err(err) = sessions.save(session).await {
        warn!(error = %err, "failed to persist session; keeping it in memory only");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use storage::{KeyValueStore, MemoryKvStore, SESSION_STORAGE_KEY};

    use super::*;

    fn register<'a>(
        email: &'a str,
        phone: &'a str,
        password: &'a str,
        confirm: &'a str,
    ) -> RegisterForm<'a> {
        RegisterForm {
            email,
            phone,
            password,
            confirm,
        }
    }

    #[test]
    fn login_requires_both_fields_before_email_check() {
        let err = validate_login(LoginForm {
            email: "not-an-email",
            password: "   ",
        });
        assert_eq!(err, Err(AuthError::MissingFields));

        let err = validate_login(LoginForm {
            email: "not-an-email",
            password: "x",
        });
        assert_eq!(err, Err(AuthError::InvalidEmail));
    }

    #[test]
    fn login_trims_and_derives_name() {
        let session = validate_login(LoginForm {
            email: "  a@b.com ",
            password: "Passw0rd",
        })
        .expect("valid login");
        assert_eq!(session, UserSession::for_email("a@b.com", None));
        assert_eq!(session.name, "a");
    }

    #[test]
    fn register_reports_first_failing_check() {
        let ok = register("a@b.com", "0821234567", "Passw0rd", "Passw0rd");
        assert!(validate_register(ok).is_ok());

        let cases = [
            (
                register("a@b.com", "", "Passw0rd", "Passw0rd"),
                AuthError::MissingFields,
            ),
            (
                register("a@b", "0821234567", "Passw0rd", "Passw0rd"),
                AuthError::InvalidEmail,
            ),
            (
                register("a@b.com", "12345", "Passw0rd", "Passw0rd"),
                AuthError::InvalidPhone,
            ),
            (
                register("a@b.com", "0821234567", "Passw0rd", "Passw0rD"),
                AuthError::PasswordMismatch,
            ),
            (
                register("a@b.com", "0821234567", "password", "password"),
                AuthError::WeakPassword,
            ),
            // Several failures at once: the earliest wins.
            (register("a@b", "12", "weak", "other"), AuthError::InvalidEmail),
        ];

        for (form, expected) in cases {
            assert_eq!(validate_register(form), Err(expected), "{form:?}");
        }
    }

    #[test]
    fn register_keeps_phone_on_session() {
        let session = validate_register(register(
            "bidder@auction.example",
            "+27 82 123 4567",
            "Passw0rd",
            "Passw0rd",
        ))
        .expect("valid registration");
        assert_eq!(session.name, "bidder");
        assert_eq!(session.phone.as_deref(), Some("+27 82 123 4567"));
    }

    #[test]
    fn panels_are_mutually_exclusive() {
        let mut flow = AuthFlow::new();
        let intents = flow.show_register_panel();
        assert_eq!(flow.panel(), AuthPanel::Register);
        assert!(intents.contains(&UiIntent::hide(Section::LoginPanel)));
        assert!(intents.contains(&UiIntent::show(Section::RegisterPanel)));

        let intents = flow.open();
        assert_eq!(flow.panel(), AuthPanel::Login);
        assert_eq!(intents[0], UiIntent::show(Section::AuthOverlay));
        assert!(intents.contains(&UiIntent::hide(Section::RegisterPanel)));
    }

    #[test]
    fn live_feedback_clears_on_empty_fields() {
        let flow = AuthFlow::new();
        assert_eq!(
            flow.password_feedback(""),
            UiIntent::SetPasswordStrength(None)
        );
        assert_eq!(
            flow.password_feedback("Abcdef1!"),
            UiIntent::SetPasswordStrength(Some(password_strength("Abcdef1!")))
        );
        assert_eq!(
            flow.confirm_feedback("Passw0rd", ""),
            UiIntent::SetPasswordMatch(PasswordMatch::Neutral)
        );
        assert_eq!(
            flow.confirm_feedback("Passw0rd", "Passw0r"),
            UiIntent::SetPasswordMatch(PasswordMatch::Mismatch)
        );
    }

    #[tokio::test]
    async fn successful_login_persists_session() {
        let kv = Arc::new(MemoryKvStore::new());
        let sessions = SessionStore::new(kv.clone());
        let flow = AuthFlow::new();

        let session = flow
            .submit_login(
                &sessions,
                LoginForm {
                    email: "a@b.com",
                    password: "Passw0rd",
                },
            )
            .await
            .expect("login");

        assert_eq!(sessions.load().await, Some(session));
    }

    #[tokio::test]
    async fn rejected_registration_writes_nothing() {
        let kv = Arc::new(MemoryKvStore::new());
        let sessions = SessionStore::new(kv.clone());
        let flow = AuthFlow::new();

        let err = flow
            .submit_register(
                &sessions,
                register("a@b.com", "0821234567", "Passw0rd", "Passw0rd!"),
            )
            .await;

        assert_eq!(err, Err(AuthError::PasswordMismatch));
        assert_eq!(kv.get(SESSION_STORAGE_KEY).await.expect("get"), None);
    }
}
