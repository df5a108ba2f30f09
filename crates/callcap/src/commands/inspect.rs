use anyhow::Context;
use callcap_core::{
    aggregate, select_metrics, CallAnalysis, CallOutcome, Config, DataCaptureMetrics, Engine,
    MetricsReport,
};
use callcap_logs::{load_calls, CallRecord};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectedCall {
    index: usize,
    turns: usize,
    duration_seconds: Option<f64>,
    #[serde(flatten)]
    analysis: CallAnalysis,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Inspection {
    calls: Vec<InspectedCall>,
    computed: Option<DataCaptureMetrics>,
    selected: MetricsReport,
    fallback_reason: String,
}

pub fn run(file: &Path, config: Option<&Path>, date: Option<NaiveDate>) -> anyhow::Result<()> {
    let config = super::load_config(config)?;
    let calls = load_calls(file).with_context(|| format!("loading calls from {}", file.display()))?;
    let inspection = build_inspection(&calls, super::resolve_date(date), config);
    super::emit_json(&inspection, None)
}

fn build_inspection(calls: &[CallRecord], date: NaiveDate, config: Config) -> Inspection {
    let engine = Engine::new(config);

    let inspected: Vec<InspectedCall> = calls
        .iter()
        .enumerate()
        .map(|(index, call)| InspectedCall {
            index,
            turns: call.turn_count(),
            duration_seconds: call.summary.duration_seconds,
            analysis: engine.analyze(call),
        })
        .collect();

    let outcomes: Vec<CallOutcome> = inspected.iter().map(|c| c.analysis.outcome).collect();
    let computed = aggregate(&outcomes);
    let selected = select_metrics(computed, calls.len(), date, engine.config());

    Inspection {
        calls: inspected,
        computed,
        selected,
        fallback_reason: selected.reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callcap_logs::Turn;

    #[test]
    fn test_inspection_lists_every_call() {
        let calls = vec![
            CallRecord::new().with_turns([Turn::user("my name is Asha, email asha@example.in")]),
            CallRecord::new(),
        ];
        let day = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        let inspection = build_inspection(&calls, day, Config::default());

        assert_eq!(inspection.calls.len(), 2);
        let first = &inspection.calls[0].analysis;
        assert_eq!(first.fields.name.as_deref(), Some("Asha"));
        assert_eq!(first.fields.email.as_deref(), Some("asha@example.in"));
        assert_eq!(first.outcome.captured_field_count, 2);
        assert!(inspection.computed.is_some());
        assert!(inspection.selected.is_demo);
        assert_eq!(inspection.fallback_reason, "tiny sample (2 calls)");
    }

    #[test]
    fn test_inspection_agrees_with_engine() {
        let calls: Vec<CallRecord> = (0..12)
            .map(|i| {
                CallRecord::new().with_duration(60.0).with_turns([
                    Turn::user(if i % 3 == 0 { "i am X" } else { "my name is Meera" }),
                    Turn::user("email meera@example.com, phone 9876543210"),
                ])
            })
            .collect();
        let day = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        let config = Config {
            demo_fallback: false,
            ..Config::default()
        };
        let engine = Engine::new(config.clone());

        let inspection = build_inspection(&calls, day, config);
        assert_eq!(inspection.computed, engine.compute(&calls));
        assert_eq!(inspection.selected, engine.evaluate(&calls, day));
        assert!(!inspection.selected.is_demo);
    }

    #[test]
    fn test_inspection_json_shape() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        let inspection = build_inspection(&[CallRecord::new()], day, Config::default());
        let json = serde_json::to_value(&inspection).unwrap();

        assert!(json["calls"][0]["fields"].is_object());
        assert!(json["calls"][0]["outcome"]["abandoned"].as_bool().unwrap());
        assert_eq!(json["selected"]["isDemo"], true);
        assert!(json["computed"].is_object());
    }
}
