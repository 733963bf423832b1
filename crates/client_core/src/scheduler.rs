use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::{controller::events::UiEvent, intents::FlowTimer};

pub trait Scheduler {
    /// Fire-and-forget: `timer` comes back as [`UiEvent::TimerElapsed`] once
    /// `delay` has passed. There is no cancellation.
    fn schedule(&mut self, delay: Duration, timer: FlowTimer);
}

/// Posts elapsed timers back into the event loop's channel. Must be used
/// from inside a tokio runtime.
#[derive(Clone)]
pub struct TokioScheduler {
    events: UnboundedSender<UiEvent>,
}

impl TokioScheduler {
    pub fn new(events: UnboundedSender<UiEvent>) -> Self {
        Self { events }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, timer: FlowTimer) {
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(UiEvent::TimerElapsed(timer)).is_err() {
                debug!(?timer, "event loop closed before timer fired");
            }
        });
    }
}
