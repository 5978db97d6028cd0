//! Validation of candidate uploads.

use crate::error::{AideError, Result};
use crate::identity::{UPLOAD_LIMIT, UPLOAD_WINDOW_HOURS};
use std::fmt;

/// Only files of this MIME type are accepted.
pub const PDF_MIME: &str = "application/pdf";

/// Largest accepted file (10 MiB, inclusive).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// A file offered for upload.
pub trait UploadSource {
    fn name(&self) -> &str;

    fn size_bytes(&self) -> u64;

    fn mime_type(&self) -> &str;

    /// Best-effort textual view of the file contents.
    fn read_text(&self) -> Result<String>;
}

/// An upload held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

impl UploadSource for UploadedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn read_text(&self) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.bytes).into_owned())
    }
}

/// Why an upload was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotPdf,
    TooLarge,
    QuotaExhausted,
}

impl RejectReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::NotPdf => "Only PDF files are allowed",
            Self::TooLarge => "File size must be less than 10MB",
            Self::QuotaExhausted => "Upload limit reached (10 files per 24 hours)",
        }
    }

    pub fn into_error(self) -> AideError {
        match self {
            Self::NotPdf | Self::TooLarge => AideError::invalid_argument(self.message()),
            Self::QuotaExhausted => AideError::QuotaExceeded {
                limit: UPLOAD_LIMIT,
                window_hours: UPLOAD_WINDOW_HOURS,
            },
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDecision {
    Accepted,
    Rejected(RejectReason),
}

impl UploadDecision {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }

    /// Converts a rejection into its error, for `?` propagation.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected(reason) => Err(reason.into_error()),
        }
    }
}

/// Checks a candidate file against the upload rules.
///
/// Checks run in order: type, size, quota. The gate never touches the quota
/// counter; recording the upload is the caller's job once it is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadGate;

impl UploadGate {
    /// Type and size checks only; the quota is not consulted.
    pub fn check_file(file: &dyn UploadSource) -> UploadDecision {
        if file.mime_type() != PDF_MIME {
            return UploadDecision::Rejected(RejectReason::NotPdf);
        }
        if file.size_bytes() > MAX_UPLOAD_BYTES {
            return UploadDecision::Rejected(RejectReason::TooLarge);
        }
        UploadDecision::Accepted
    }

    pub fn validate(file: &dyn UploadSource, can_upload: bool) -> UploadDecision {
        match Self::check_file(file) {
            UploadDecision::Accepted if !can_upload => {
                UploadDecision::Rejected(RejectReason::QuotaExhausted)
            }
            decision => decision,
        }
    }
}

/// Prompt sent on the user's behalf for an accepted upload.
pub fn upload_message(file: &dyn UploadSource) -> String {
    let name = file.name();
    let megabytes = file.size_bytes() as f64 / 1024.0 / 1024.0;
    format!(
        "I've uploaded a PDF file: \"{name}\". Please analyze this document and provide detailed insights about its content, key points, and any important information it contains.\n\n\
         File Details:\n\
         - Name: {name}\n\
         - Size: {megabytes:.2} MB\n\
         - Type: PDF Document\n\n\
         Please provide a comprehensive analysis of this document."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(size: usize) -> UploadedFile {
        UploadedFile::new("report.pdf", PDF_MIME, vec![b'%'; size])
    }

    #[test]
    fn test_accepts_pdf_within_limits() {
        assert_eq!(UploadGate::validate(&pdf(2048), true), UploadDecision::Accepted);
    }

    #[test]
    fn test_size_boundary_is_inclusive() {
        let at_limit = pdf(MAX_UPLOAD_BYTES as usize);
        assert!(UploadGate::validate(&at_limit, true).is_accepted());

        let over = pdf(MAX_UPLOAD_BYTES as usize + 1);
        assert_eq!(
            UploadGate::validate(&over, true),
            UploadDecision::Rejected(RejectReason::TooLarge)
        );
    }

    #[test]
    fn test_type_checked_before_size_and_quota() {
        let file = UploadedFile::new("notes.txt", "text/plain", vec![0; 20 * 1024 * 1024]);
        let decision = UploadGate::validate(&file, false);
        assert_eq!(decision, UploadDecision::Rejected(RejectReason::NotPdf));
    }

    #[test]
    fn test_check_file_ignores_quota() {
        assert!(UploadGate::check_file(&pdf(10)).is_accepted());
        let file = UploadedFile::new("notes.txt", "text/plain", vec![0; 4]);
        assert_eq!(
            UploadGate::check_file(&file),
            UploadDecision::Rejected(RejectReason::NotPdf)
        );
    }

    #[test]
    fn test_quota_checked_last() {
        let decision = UploadGate::validate(&pdf(10), false);
        assert_eq!(decision, UploadDecision::Rejected(RejectReason::QuotaExhausted));

        let err = decision.into_result().unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(err.to_string(), RejectReason::QuotaExhausted.message());
    }

    #[test]
    fn test_reject_messages() {
        assert_eq!(RejectReason::NotPdf.to_string(), "Only PDF files are allowed");
        assert_eq!(
            RejectReason::TooLarge.to_string(),
            "File size must be less than 10MB"
        );
        assert!(RejectReason::TooLarge.into_error().is_invalid_argument());
    }

    #[test]
    fn test_upload_message_layout() {
        let file = UploadedFile::new("Q3 report.pdf", PDF_MIME, vec![0; 1_572_864]);
        let message = upload_message(&file);

        assert!(message.starts_with("I've uploaded a PDF file: \"Q3 report.pdf\"."));
        assert!(message.contains(
            "\n\nFile Details:\n- Name: Q3 report.pdf\n- Size: 1.50 MB\n- Type: PDF Document\n\n"
        ));
        assert!(message.ends_with("Please provide a comprehensive analysis of this document."));
    }

    #[test]
    fn test_read_text_is_lossy() {
        let file = UploadedFile::new("a.pdf", PDF_MIME, vec![b'h', b'i', 0xff]);
        assert_eq!(file.read_text().unwrap(), "hi\u{fffd}");
    }
}
