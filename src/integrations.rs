//! Side-effect-only integration stubs.
//!
//! Each stub accepts an input payload, waits its simulated latency, and
//! returns a canned success payload carrying a freshly generated opaque
//! identifier. No real network call, file system, or third-party API is
//! involved, and no failure mode is documented; that is the whole
//! contract.

use serde::{Deserialize, Serialize};

use crate::latency::{self, Latency};
use crate::record::RecordId;

/// Canned reply of [`Integrations::invoke_llm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Generated text.
    pub response: String,
}

/// Canned reply of [`Integrations::send_email`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailReceipt {
    /// Always true.
    pub success: bool,
    /// Opaque delivery token.
    pub message_id: String,
}

/// Canned reply of [`Integrations::upload_file`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Always true.
    pub success: bool,
    /// Opaque storage token.
    pub file_id: String,
    /// Mock storage URL.
    pub url: String,
}

/// Canned reply of [`Integrations::generate_image`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Always true.
    pub success: bool,
    /// Mock image URL.
    pub image_url: String,
}

/// Extracted file content inside [`ExtractedData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Extracted text.
    pub text: String,
    /// Extraction metadata.
    pub metadata: ExtractionMetadata,
}

/// Metadata of a mock extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Page count of the mock document.
    pub pages: u32,
}

/// Canned reply of [`Integrations::extract_data_from_uploaded_file`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedData {
    /// Always true.
    pub success: bool,
    /// The extracted content.
    pub data: ExtractedContent,
}

/// Handle over the mock integration stubs.
#[derive(Debug, Clone, Copy)]
pub struct Integrations {
    latency: Latency,
}

impl Integrations {
    /// Creates the integrations handle with the given latency profile.
    #[must_use]
    pub const fn new(latency: Latency) -> Self {
        Self { latency }
    }

    fn token() -> String {
        RecordId::generate().into()
    }

    /// Mock generative-text request.
    pub async fn invoke_llm(&self, prompt: &str) -> LlmResponse {
        latency::wait(self.latency.llm).await;
        tracing::debug!(integration = "invoke_llm", "stub call");
        LlmResponse {
            response: format!("Mock LLM response for: {prompt}"),
        }
    }

    /// Mock email delivery.
    pub async fn send_email(&self, to: &str, subject: &str, body: &str) -> EmailReceipt {
        latency::wait(self.latency.email).await;
        tracing::debug!(integration = "send_email", to, subject, bytes = body.len(), "stub call");
        EmailReceipt {
            success: true,
            message_id: Self::token(),
        }
    }

    /// Mock file upload.
    pub async fn upload_file(&self, file_name: &str) -> FileUpload {
        latency::wait(self.latency.upload).await;
        tracing::debug!(integration = "upload_file", file_name, "stub call");
        FileUpload {
            success: true,
            file_id: Self::token(),
            url: format!("https://mock-storage.example.com/{}", Self::token()),
        }
    }

    /// Mock image generation.
    pub async fn generate_image(&self, prompt: &str) -> GeneratedImage {
        latency::wait(self.latency.image).await;
        tracing::debug!(integration = "generate_image", prompt, "stub call");
        GeneratedImage {
            success: true,
            image_url: format!("https://mock-image-gen.example.com/{}.png", Self::token()),
        }
    }

    /// Mock data extraction from a previously uploaded file.
    pub async fn extract_data_from_uploaded_file(&self, file_id: &str) -> ExtractedData {
        latency::wait(self.latency.extraction).await;
        tracing::debug!(integration = "extract_data", file_id, "stub call");
        ExtractedData {
            success: true,
            data: ExtractedContent {
                text: "Mock extracted content".to_string(),
                metadata: ExtractionMetadata { pages: 5 },
            },
        }
    }
}
