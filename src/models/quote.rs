use serde::{Deserialize, Serialize};

/// Quotation payload shape exchanged with the content provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    pub text: String,
    pub reference: String,
    /// Grounding link, when the provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}
