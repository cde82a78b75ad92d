//! User intent as a closed enum.
//!
//! The classifier matches keywords in a fixed priority order: specific
//! action intents (download, reissue, correction, renewal, status) are
//! checked before the generic ones so that "download my certificate and
//! apply" resolves to `Download`, not `Apply`. The order itself lives in
//! the lexicon configuration; this enum only names the variants so the
//! response synthesizer can dispatch exhaustively.

use serde::{Deserialize, Serialize};

/// Action the user wants performed on a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Download,
    Reissue,
    Correction,
    Renewal,
    Status,
    Apply,
    Documents,
    Procedure,
    Contact,
    Fees,
    Eligibility,
    #[default]
    GeneralInquiry,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Download => "download",
            Intent::Reissue => "reissue",
            Intent::Correction => "correction",
            Intent::Renewal => "renewal",
            Intent::Status => "status",
            Intent::Apply => "apply",
            Intent::Documents => "documents",
            Intent::Procedure => "procedure",
            Intent::Contact => "contact",
            Intent::Fees => "fees",
            Intent::Eligibility => "eligibility",
            Intent::GeneralInquiry => "general_inquiry",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
