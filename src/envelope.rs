//! Pure envelope builders: current UI field values in, wire bodies out.
//!
//! No I/O happens here.  The chat builder takes the history *before* the
//! current input is recorded and returns a snapshot copy, so a sent envelope
//! can never be altered retroactively by later screen activity.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{CompanyType, SignUpEnvelope, SubmissionEnvelope, SurveyEnvelope};

/// Local validation failures.  None of these ever reach the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Blank / whitespace-only primary input.  Policy: silently suppressed,
    /// the submission simply does not happen.
    BlankInput,
    /// Password field contained something other than ASCII digits (or a
    /// value too large for i64).  Rejected before any request is issued.
    InvalidPassword,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::BlankInput => write!(f, "Input must not be empty."),
            FormError::InvalidPassword => {
                write!(f, "Password must consist of digits only.")
            }
        }
    }
}

/// Build the `/api/input` envelope from the current input and the history of
/// prior submissions, stamping the wall clock.
///
/// Precondition (enforced by the submitting controller): `current` trimmed is
/// non-empty.
pub fn build_chat_envelope(current: &str, history: &[String]) -> SubmissionEnvelope {
    build_chat_envelope_at(current, history, Utc::now())
}

/// Clock-injected variant of [`build_chat_envelope`]; identical inputs and
/// timestamp yield an identical envelope.
pub fn build_chat_envelope_at(
    current: &str,
    history: &[String],
    at: DateTime<Utc>,
) -> SubmissionEnvelope {
    let mut input_history: Vec<String> = history.to_vec();
    input_history.push(current.to_string());
    let total_inputs = input_history.len();
    SubmissionEnvelope {
        current_input: current.to_string(),
        timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        input_history,
        total_inputs,
    }
}

/// Map the selected company type to its survey envelope.
pub fn build_survey_envelope(user_id: &str, company_type: CompanyType) -> SurveyEnvelope {
    SurveyEnvelope {
        user_id: user_id.to_string(),
        company_type,
    }
}

/// Assemble the `/signup` envelope.
///
/// * blank `user_id` → [`FormError::BlankInput`]
/// * `raw_pw` must parse as a non-negative integer; anything else →
///   [`FormError::InvalidPassword`]
/// * blank `company_id` → `None` (wire `null`, never an empty string)
pub fn build_signup_envelope(
    user_id: &str,
    raw_pw: &str,
    company_id: &str,
) -> Result<SignUpEnvelope, FormError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(FormError::BlankInput);
    }

    let raw_pw = raw_pw.trim();
    if raw_pw.is_empty() || !raw_pw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormError::InvalidPassword);
    }
    let user_pw: i64 = raw_pw.parse().map_err(|_| FormError::InvalidPassword)?;

    let company_id = company_id.trim();
    Ok(SignUpEnvelope {
        user_id: user_id.to_string(),
        user_pw,
        company_id: if company_id.is_empty() {
            None
        } else {
            Some(company_id.to_string())
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()
    }

    #[test]
    fn chat_envelope_appends_current_to_history_snapshot() {
        let history = vec!["first".to_string(), "second".to_string()];
        let envelope = build_chat_envelope_at("third", &history, fixed_clock());
        assert_eq!(envelope.current_input, "third");
        assert_eq!(envelope.input_history, vec!["first", "second", "third"]);
        assert_eq!(envelope.total_inputs, 3);
        // The source history is untouched: the envelope owns a copy.
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn chat_envelope_is_deterministic_under_a_fixed_clock() {
        let history = vec!["hello".to_string()];
        let a = build_chat_envelope_at("again", &history, fixed_clock());
        let b = build_chat_envelope_at("again", &history, fixed_clock());
        assert_eq!(a, b);
        assert_eq!(a.timestamp, "2026-08-25T12:00:00.000Z");
    }

    #[test]
    fn real_clock_timestamps_are_monotonic() {
        let a = build_chat_envelope("one", &[]);
        let b = build_chat_envelope("two", &[]);
        assert!(b.timestamp >= a.timestamp);
    }

    #[test]
    fn first_submission_matches_the_documented_scenario() {
        let envelope = build_chat_envelope_at("hello", &[], fixed_clock());
        assert_eq!(envelope.input_history, vec!["hello"]);
        assert_eq!(envelope.total_inputs, 1);
    }

    #[test]
    fn survey_envelope_carries_the_selection() {
        let envelope = build_survey_envelope("test_user", CompanyType::Sme);
        assert_eq!(envelope.user_id, "test_user");
        assert_eq!(envelope.company_type, CompanyType::Sme);
    }

    #[test]
    fn signup_accepts_numeric_password_and_company_id() {
        let envelope = build_signup_envelope("alice", "123456", "acme-01").unwrap();
        assert_eq!(envelope.user_pw, 123_456);
        assert_eq!(envelope.company_id.as_deref(), Some("acme-01"));
    }

    #[test]
    fn signup_blank_company_id_becomes_none() {
        let envelope = build_signup_envelope("alice", "42", "   ").unwrap();
        assert_eq!(envelope.company_id, None);
    }

    #[test]
    fn signup_rejects_non_numeric_password() {
        assert_eq!(
            build_signup_envelope("alice", "hunter2", ""),
            Err(FormError::InvalidPassword)
        );
        assert_eq!(
            build_signup_envelope("alice", "", ""),
            Err(FormError::InvalidPassword)
        );
        // Larger than i64::MAX
        assert_eq!(
            build_signup_envelope("alice", "99999999999999999999", ""),
            Err(FormError::InvalidPassword)
        );
    }

    #[test]
    fn signup_rejects_blank_user_id() {
        assert_eq!(
            build_signup_envelope("  ", "1234", ""),
            Err(FormError::BlankInput)
        );
    }

    proptest! {
        #[test]
        fn total_inputs_always_equals_history_length(
            current in "[^\\s]{1,16}",
            history in proptest::collection::vec(".{0,16}", 0..8),
        ) {
            let envelope = build_chat_envelope_at(&current, &history, fixed_clock());
            prop_assert_eq!(envelope.total_inputs, envelope.input_history.len());
            prop_assert_eq!(envelope.total_inputs, history.len() + 1);
            prop_assert_eq!(envelope.input_history.last().unwrap(), &current);
        }
    }
}
