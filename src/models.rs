//! Wire types exchanged with the gateway.
//!
//! Field names are wire-exact: the chat envelope uses camelCase, the account
//! endpoints use the snake_case names the gateway services expect.  Envelopes
//! are built fresh per submission and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/input`: the current input plus a snapshot of every
/// input submitted on this screen since page load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEnvelope {
    pub current_input: String,
    /// ISO-8601, stamped at construction time.
    pub timestamp: String,
    /// Insertion order == submission order; includes `current_input` as the
    /// last entry.
    pub input_history: Vec<String>,
    /// Always equals `input_history.len()`.
    pub total_inputs: usize,
}

/// Company classification picked on the survey screen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyType {
    /// Large Manufacturing Enterprise
    #[serde(rename = "LME")]
    Lme,
    /// Small & Medium Enterprise
    #[serde(rename = "SME")]
    Sme,
}

impl CompanyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyType::Lme => "LME",
            CompanyType::Sme => "SME",
        }
    }
}

/// Body of the survey submission (stub contract, same conventions as
/// `/api/input`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SurveyEnvelope {
    pub user_id: String,
    pub company_type: CompanyType,
}

/// Body of `POST /signup`.  `company_id` is optional and serialized as an
/// explicit `null` when absent, never as an empty string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SignUpEnvelope {
    pub user_id: String,
    pub user_pw: i64,
    pub company_id: Option<String>,
}

/// Error body convention of the gateway: failures optionally carry a
/// human-readable `detail` field, used verbatim in user-facing notices.
#[derive(Deserialize, Debug, Clone)]
pub struct ErrorBody {
    pub detail: Option<String>,
}
