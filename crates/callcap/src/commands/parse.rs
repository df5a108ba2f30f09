use anyhow::Context;
use callcap_logs::parse_raw_log;
use std::path::Path;

pub fn run(file: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("reading raw log {}", file.display()))?;
    let record = parse_raw_log(&content);

    if record.conversation.is_empty() {
        tracing::warn!(file = %file.display(), "no conversation turns found in log");
    }

    super::emit_json(&record, output)
}
