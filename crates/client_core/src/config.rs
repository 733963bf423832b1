//! Tunables for the simulated backend and the placeholder results panel.

use std::time::Duration;

use shared::domain::{AuctionSource, ResultSummary};

pub const DEFAULT_UPLOAD_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_URL_ERROR_DISPLAY: Duration = Duration::from_millis(5000);
pub const DEFAULT_UPLOAD_LABEL: &str = "Upload PDF";
pub const PROCESSING_LABEL: &str = "Processing...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTemplate {
    pub status: String,
    pub items_found: String,
    pub processing_time: String,
}

impl Default for ResultTemplate {
    fn default() -> Self {
        Self {
            status: "✓ Successfully processed".into(),
            items_found: "5-10 items detected".into(),
            processing_time: "~2 seconds".into(),
        }
    }
}

impl ResultTemplate {
    pub fn summarize(&self, url: &str) -> ResultSummary {
        ResultSummary {
            url: url.to_string(),
            status: self.status.clone(),
            items_found: self.items_found.clone(),
            processing_time: self.processing_time.clone(),
            source: AuctionSource::detect(url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    pub upload_delay: Duration,
    pub processing_delay: Duration,
    pub url_error_display: Duration,
    pub upload_label: String,
    pub results: ResultTemplate,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            upload_delay: DEFAULT_UPLOAD_DELAY,
            processing_delay: DEFAULT_PROCESSING_DELAY,
            url_error_display: DEFAULT_URL_ERROR_DISPLAY,
            upload_label: DEFAULT_UPLOAD_LABEL.into(),
            results: ResultTemplate::default(),
        }
    }
}
