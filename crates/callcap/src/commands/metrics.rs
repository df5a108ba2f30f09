use anyhow::Context;
use callcap_core::{Config, Engine, MetricsReport};
use callcap_logs::{load_calls, CallRecord};
use chrono::NaiveDate;
use std::path::Path;

pub fn run(
    file: &Path,
    date: Option<NaiveDate>,
    config: Option<&Path>,
    no_demo: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = super::load_config(config)?;
    if no_demo {
        config.demo_fallback = false;
    }

    let calls = load_calls(file).with_context(|| format!("loading calls from {}", file.display()))?;
    let report = build_report(&calls, super::resolve_date(date), config);

    if report.is_demo {
        tracing::warn!(reason = %report.reason, "reporting demo metrics");
    }

    super::emit_json(&report, output)
}

fn build_report(calls: &[CallRecord], date: NaiveDate, config: Config) -> MetricsReport {
    Engine::new(config).evaluate(calls, date)
}
