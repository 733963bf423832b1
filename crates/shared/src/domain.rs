use serde::{Deserialize, Serialize};

pub const PDF_MIME_TYPE: &str = "application/pdf";
/// Upper bound on an upload candidate, inclusive (50 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// The one identity record a visitor can hold at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserSession {
    pub fn for_email(email: impl Into<String>, phone: Option<String>) -> Self {
        let email = email.into();
        let name = local_part_of(&email).to_string();
        Self { email, name, phone }
    }

    /// Name shown in the greeting banner.
    pub fn display_name(&self) -> &str {
        if self.email.is_empty() {
            &self.name
        } else {
            &self.email
        }
    }
}

/// Everything before the first `@`, or the whole input when there is none.
pub fn local_part_of(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME_TYPE
    }

    pub fn fits_upload_limit(&self) -> bool {
        self.size_bytes <= MAX_UPLOAD_BYTES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPanel {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessedStage {
    Uploaded,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    Idle,
    AwaitingAuth,
    ReadyToUpload,
    FileSelected,
    Uploading,
    Processed(ProcessedStage),
}

impl FlowState {
    pub fn label(self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::AwaitingAuth => "awaiting_auth",
            FlowState::ReadyToUpload => "ready_to_upload",
            FlowState::FileSelected => "file_selected",
            FlowState::Uploading => "uploading",
            FlowState::Processed(ProcessedStage::Uploaded) => "processed_uploaded",
            FlowState::Processed(ProcessedStage::Results) => "processed_results",
        }
    }

    /// States in which the upload section is on screen.
    pub fn shows_upload_section(self) -> bool {
        matches!(
            self,
            FlowState::ReadyToUpload
                | FlowState::FileSelected
                | FlowState::Uploading
                | FlowState::Processed(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    UrlInput,
    PdfUpload,
    AuthOverlay,
    LoginPanel,
    RegisterPanel,
    UploadButton,
    OriginalButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionSource {
    CarsCoZa,
    Copart,
    Smd,
    Gumtree,
    FacebookMarketplace,
    Unknown,
}

impl AuctionSource {
    pub fn detect(url: &str) -> Self {
        if url.contains("cars.co.za") {
            AuctionSource::CarsCoZa
        } else if url.contains("copart") {
            AuctionSource::Copart
        } else if url.contains("smd") {
            AuctionSource::Smd
        } else if url.contains("gumtree") {
            AuctionSource::Gumtree
        } else if url.contains("facebook") {
            AuctionSource::FacebookMarketplace
        } else {
            AuctionSource::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuctionSource::CarsCoZa => "Cars.co.za",
            AuctionSource::Copart => "Copart",
            AuctionSource::Smd => "SMD",
            AuctionSource::Gumtree => "Gumtree",
            AuctionSource::FacebookMarketplace => "Facebook Marketplace",
            AuctionSource::Unknown => "Unknown",
        }
    }
}

/// Content of the results panel shown once processing finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub url: String,
    pub status: String,
    pub items_found: String,
    pub processing_time: String,
    pub source: AuctionSource,
}
