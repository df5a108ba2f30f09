use callcap_core::{fallback_metrics, Config, FallbackReason, MetricsReport};
use chrono::NaiveDate;
use std::path::Path;

pub fn run(date: Option<NaiveDate>, config: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config)?;
    let report = build_report(super::resolve_date(date), &config);
    super::emit_json(&report, None)
}

fn build_report(date: NaiveDate, config: &Config) -> MetricsReport {
    MetricsReport::demo(fallback_metrics(date, config), FallbackReason::Requested)
}
