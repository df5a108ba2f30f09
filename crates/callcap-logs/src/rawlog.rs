//! Parser for the telephony bridge's plain-text call logs
//!
//! ```text
//! Call started at: 2025-06-12T10:15:02
//! Stream SID: MZ123
//! [10:15:03] AI (chunk): Namaste, this is
//! [10:15:04] AI (chunk): the loan helpline.
//! [10:15:09] User: my name is Ravi
//! Call ended at: 2025-06-12T10:16:40
//! ```

use crate::types::{CallRecord, Speaker, Turn};
use chrono::{DateTime, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

static LINE_RE: OnceLock<Regex> = OnceLock::new();

/// Agent chunks further apart than this start a new turn
const AGENT_CHUNK_GAP_SECS: i64 = 2;

struct PendingTurn {
    speaker: Speaker,
    timestamp: String,
    chunks: Vec<String>,
}

#[derive(Default)]
struct LogParser {
    call_started: Option<String>,
    call_ended: Option<String>,
    stream_sid: Option<String>,
    turns: Vec<Turn>,
    pending: Option<PendingTurn>,
    last_agent_time: Option<NaiveTime>,
    agent_gaps: Vec<i64>,
    noise_count: usize,
}

impl LogParser {
    fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.turns.push(
                Turn::new(pending.speaker, pending.chunks.join(" ")).with_timestamp(pending.timestamp),
            );
        }
    }

    fn full_timestamp(&self, clock: &str) -> String {
        match &self.call_started {
            Some(start) => {
                let date = start.split('T').next().unwrap_or(start);
                format!("{date}T{clock}")
            }
            None => clock.to_string(),
        }
    }

    fn push_chunk(&mut self, speaker: Speaker, clock: &str, text: &str) {
        if self.pending.as_ref().is_some_and(|p| p.speaker != speaker) {
            self.flush();
        }
        if self.pending.is_none() {
            self.pending = Some(PendingTurn {
                speaker,
                timestamp: self.full_timestamp(clock),
                chunks: Vec::new(),
            });
        }
        if let Some(pending) = self.pending.as_mut() {
            pending.chunks.push(text.to_string());
        }
    }

    fn agent_chunk(&mut self, clock: &str, text: &str) {
        let time = NaiveTime::parse_from_str(clock, "%H:%M:%S").ok();

        if let (Some(time), Some(last)) = (time, self.last_agent_time) {
            let gap = (time - last).num_seconds().rem_euclid(86_400);
            self.agent_gaps.push(gap);
            let continuing = self
                .pending
                .as_ref()
                .is_some_and(|p| p.speaker == Speaker::Agent);
            if continuing && gap > AGENT_CHUNK_GAP_SECS {
                self.flush();
            }
        }

        self.push_chunk(Speaker::Agent, clock, text);
        if time.is_some() {
            self.last_agent_time = time;
        }
    }

    fn user_chunk(&mut self, clock: &str, text: &str) {
        if text.to_lowercase().contains("<noise>") {
            self.noise_count += 1;
        }
        self.push_chunk(Speaker::User, clock, text);
    }

    fn line(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix("Call started at:") {
            self.call_started = Some(rest.trim().to_string());
            return;
        }
        if let Some(rest) = line.strip_prefix("Call ended at:") {
            self.call_ended = Some(rest.trim().to_string());
            return;
        }
        if let Some(rest) = line.strip_prefix("Stream SID:") {
            self.stream_sid = Some(rest.trim().to_string());
            return;
        }

        let re = LINE_RE.get_or_init(|| {
            Regex::new(r"^\[([0-9]{2}:[0-9]{2}:[0-9]{2})\] (.+?): (.+)$").unwrap()
        });
        let Some(caps) = re.captures(line) else {
            return;
        };
        let clock = &caps[1];
        let speaker = &caps[2];
        let text = caps[3].trim();

        if speaker.contains("AI") {
            self.agent_chunk(clock, text);
        } else if speaker.contains("User") {
            self.user_chunk(clock, text);
        }
    }

    fn finish(mut self) -> CallRecord {
        self.flush();

        let duration_seconds = match (
            self.call_started.as_deref().and_then(parse_datetime),
            self.call_ended.as_deref().and_then(parse_datetime),
        ) {
            (Some(start), Some(end)) => Some((end - start).num_milliseconds() as f64 / 1000.0),
            _ => None,
        };

        let mut record = CallRecord::new();
        let user_turns = self
            .turns
            .iter()
            .filter(|t| t.speaker == Speaker::User)
            .count();
        let agent_turns = self.turns.len() - user_turns;

        let summary = &mut record.summary;
        summary.duration_seconds = duration_seconds;
        summary.stream_sid = self.stream_sid;
        summary.call_started = self.call_started;
        summary.call_ended = self.call_ended;
        summary.noise_count = self.noise_count;
        summary
            .extra
            .insert("total_user_messages".to_string(), user_turns.into());
        summary
            .extra
            .insert("total_ai_responses".to_string(), agent_turns.into());
        if !self.agent_gaps.is_empty() {
            let mean =
                self.agent_gaps.iter().sum::<i64>() as f64 / self.agent_gaps.len() as f64;
            summary.extra.insert(
                "average_ai_response_latency".to_string(),
                ((mean * 100.0).round() / 100.0).into(),
            );
        }

        record.conversation = self.turns;
        record
    }
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Parse a raw call log into a call record. Unrecognised lines are ignored.
pub fn parse_raw_log(content: &str) -> CallRecord {
    let mut parser = LogParser::default();
    for line in content.lines() {
        parser.line(line.trim());
    }
    parser.finish()
}
