use anyhow::Result;
use crawl_client::{ClientConfig, RunSummary, run, setup_logging};
use tracing::info;

fn main() -> Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = setup_logging(config.log_dir.as_deref())?;
    info!(?config, "starting headless run");

    let summary = run(&config)?;
    if config.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("seed {} | {} ticks | {} turns", summary.seed, summary.ticks, summary.turns);
    println!(
        "{} at level {} ({} xp), health {}/{}, {} enemies left",
        summary.status,
        summary.level,
        summary.experience,
        summary.health,
        summary.max_health,
        summary.enemies_left
    );
    for message in &summary.messages {
        println!("  {message}");
    }
}
