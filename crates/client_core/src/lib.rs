//! Landing-page state machine: URL scan, auth gate, PDF upload, results.
//!
//! The flows are synchronous and UI-framework agnostic. They emit
//! [`intents::UiIntent`] values which the [`controller::UiController`]
//! applies to a [`presenter::Presenter`] and a [`scheduler::Scheduler`].

pub mod auth_flow;
pub mod config;
pub mod controller;
pub mod intents;
pub mod presenter;
pub mod scheduler;
pub mod upload_flow;
pub mod validators;

pub use auth_flow::{AuthFlow, LoginForm, RegisterForm};
pub use config::{FlowSettings, ResultTemplate};
pub use controller::{events::UiEvent, UiController};
pub use intents::{FlowTimer, TimerKind, UiIntent, UploadControl};
pub use presenter::Presenter;
pub use scheduler::{Scheduler, TokioScheduler};
pub use upload_flow::UploadFlow;
