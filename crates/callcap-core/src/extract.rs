//! Per-call field extraction and outcome classification

use crate::config::{Config, MissingFieldPolicy};
use crate::patterns;
use callcap_logs::{CallRecord, Speaker, Turn};
use serde::Serialize;

/// Candidate values captured from a transcript. A slot, once filled, is
/// never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub pan: Option<String>,
    pub fan: Option<String>,
}

impl ExtractedFields {
    /// Fill any empty slot from one utterance
    fn absorb(&mut self, text: &str) {
        if self.email.is_none() {
            self.email = patterns::email_re()
                .find(text)
                .map(|m| m.as_str().to_string());
        }
        if self.phone.is_none() {
            self.phone = patterns::phone_re()
                .find(text)
                .map(|m| m.as_str().to_string());
        }
        if self.pan.is_none() {
            self.pan = patterns::pan_re()
                .find(text)
                .map(|m| m.as_str().to_uppercase());
        }
        if self.name.is_none() {
            self.name = patterns::name_res()
                .iter()
                .find_map(|re| re.captures(text))
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
                .filter(|name| !name.is_empty());
        }
        if self.fan.is_none() {
            self.fan = patterns::fan_re()
                .captures(text)
                .and_then(|caps| caps.get(2))
                .map(|m| m.as_str().to_string());
        }
    }

    pub fn all_present(&self) -> bool {
        self.name.is_some()
            && self.email.is_some()
            && self.phone.is_some()
            && self.pan.is_some()
            && self.fan.is_some()
    }

    pub fn captured_count(&self) -> usize {
        [&self.name, &self.email, &self.phone, &self.pan, &self.fan]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }

    pub fn validity(&self) -> FieldValidity {
        FieldValidity {
            name: self.name.as_deref().is_some_and(valid_name),
            email: self
                .email
                .as_deref()
                .is_some_and(|e| patterns::email_re().is_match(e)),
            phone: self.phone.as_deref().is_some_and(valid_phone),
            pan: self
                .pan
                .as_deref()
                .is_some_and(|p| patterns::pan_re().is_match(p)),
            fan: self.fan.as_deref().is_some_and(|f| f.chars().count() >= 3),
        }
    }
}

/// Per-field validity; an absent field is never valid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldValidity {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub pan: bool,
    pub fan: bool,
}

impl FieldValidity {
    pub fn valid_count(&self) -> usize {
        [self.name, self.email, self.phone, self.pan, self.fan]
            .iter()
            .filter(|&&v| v)
            .count()
    }

    pub fn all_valid(&self) -> bool {
        self.valid_count() == 5
    }
}

fn valid_name(name: &str) -> bool {
    name.chars().filter(|c| c.is_alphabetic()).count() >= 2
}

fn valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.len() == 10 || (digits.len() == 12 && digits.starts_with("91"))
}

/// Everything gathered from one left-to-right pass over a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptScan {
    pub fields: ExtractedFields,
    pub has_retry: bool,
    pub has_confirmation: bool,
}

/// Single pass over the turns: field capture, retry and confirmation signals
pub fn scan_transcript(turns: &[Turn]) -> TranscriptScan {
    turns
        .iter()
        .enumerate()
        .fold(TranscriptScan::default(), |mut scan, (idx, turn)| {
            scan.fields.absorb(&turn.text);

            if !scan.has_retry && patterns::retry_re().is_match(&turn.text) {
                scan.has_retry = true;
            }

            if !scan.has_confirmation && is_confirmation_ask(turn) {
                scan.has_confirmation = turns.get(idx + 1).is_some_and(is_affirmation);
            }

            scan
        })
}

fn is_confirmation_ask(turn: &Turn) -> bool {
    turn.speaker == Speaker::Agent && patterns::confirmation_ask_re().is_match(&turn.text)
}

fn is_affirmation(turn: &Turn) -> bool {
    turn.speaker == Speaker::User && patterns::affirmation_re().is_match(&turn.text)
}

/// Capture the five fields from a transcript, first match wins
pub fn extract_fields(turns: &[Turn]) -> ExtractedFields {
    scan_transcript(turns).fields
}

/// Derived per-call result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CallOutcome {
    pub required_present: bool,
    pub has_retry: bool,
    pub has_confirmation: bool,
    pub short_call: bool,
    pub abandoned: bool,
    pub recontact_required: bool,
    pub name_valid: bool,
    pub email_valid: bool,
    pub phone_valid: bool,
    pub pan_valid: bool,
    pub fan_valid: bool,
    pub captured_field_count: usize,
    pub valid_captured_field_count: usize,
}

/// Captured fields alongside the outcome derived from them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallAnalysis {
    pub fields: ExtractedFields,
    pub outcome: CallOutcome,
}

pub fn analyze_call(call: &CallRecord, config: &Config) -> CallAnalysis {
    let scan = scan_transcript(&call.conversation);
    let fields = scan.fields;
    let validity = fields.validity();
    let required_present = fields.all_present();

    let any_invalid = match config.missing_field_policy {
        MissingFieldPolicy::CountAsInvalid => !validity.all_valid(),
        MissingFieldPolicy::Exclude => fields.captured_count() > validity.valid_count(),
    };

    let short_call = match call.summary.duration_seconds {
        Some(secs) if secs.is_finite() => secs < config.short_call_seconds,
        _ => call.turn_count() < config.short_call_min_turns,
    };

    let outcome = CallOutcome {
        required_present,
        has_retry: scan.has_retry,
        has_confirmation: scan.has_confirmation,
        short_call,
        abandoned: !required_present && (short_call || any_invalid),
        recontact_required: !required_present || any_invalid,
        name_valid: validity.name,
        email_valid: validity.email,
        phone_valid: validity.phone,
        pan_valid: validity.pan,
        fan_valid: validity.fan,
        captured_field_count: fields.captured_count(),
        valid_captured_field_count: validity.valid_count(),
    };

    CallAnalysis { fields, outcome }
}

pub fn classify_call(call: &CallRecord, config: &Config) -> CallOutcome {
    analyze_call(call, config).outcome
}
