pub fn run() -> anyhow::Result<()> {
    println!("callcap {}", env!("CARGO_PKG_VERSION"));
    println!("Data-capture metrics for call-center transcripts");
    Ok(())
}
