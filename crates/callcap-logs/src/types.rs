//! Call record types (compatible with the dashboard's `/logs` payload)

use serde::{Deserialize, Deserializer, Serialize};

/// Who produced an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    /// The customer on the line
    #[serde(rename = "user", alias = "User", alias = "USER")]
    User,
    /// The human or automated agent handling the call
    #[serde(rename = "ai", alias = "AI", alias = "agent", alias = "Agent")]
    Agent,
}

/// One utterance in a call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: String::new(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Speaker::Agent, text)
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }
}

/// Descriptive call metadata. Only `duration_seconds` feeds the metrics;
/// anything unrecognised is carried through in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_sid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_started: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_ended: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub noise_count: usize,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A call transcript with its summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: CallSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conversation: Vec<Turn>,
}

impl CallRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.summary.duration_seconds = Some(seconds);
        self
    }

    pub fn with_turns(mut self, turns: impl IntoIterator<Item = Turn>) -> Self {
        self.conversation.extend(turns);
        self
    }

    pub fn push_turn(&mut self, turn: Turn) {
        self.conversation.push(turn);
    }

    pub fn turn_count(&self) -> usize {
        self.conversation.len()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
