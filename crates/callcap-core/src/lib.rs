//! Conversation data-capture metrics: field extraction, KPI aggregation and
//! the date-seeded demo fallback

mod aggregate;
mod config;
mod engine;
mod extract;
mod fallback;
pub mod patterns;
mod select;
mod types;

pub use aggregate::{aggregate, clamp_percent, percentage};
pub use config::{Config, ConfigError, MissingFieldPolicy};
pub use engine::{evaluate, Engine};
pub use extract::{
    analyze_call, classify_call, extract_fields, scan_transcript, CallAnalysis, CallOutcome,
    ExtractedFields, FieldValidity, TranscriptScan,
};
pub use fallback::{fallback_metrics, fnv1a32, seed_for, XorShift32};
pub use select::select_metrics;
pub use types::{DataCaptureMetrics, FallbackReason, Metric, MetricsReport};
