//! Headless inventory tracker: seeds the demo stock, runs the frame loop,
//! prints the final summary panel and saves the inventory.

use anyhow::Context;

use stockroom_app::{AppConfig, AppContext, OutputFormat, RunSummary, driver, seed_catalog};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;
    stockroom_observability::init(&config.log);

    tracing::info!(
        ticks = config.ticks,
        auto_buy = config.auto_buy,
        seed = ?config.seed,
        "starting stockroom"
    );

    let mut ctx = AppContext::from_config(&config);
    seed_catalog(&mut ctx);

    let outcome = driver::run(&mut ctx, &config);
    let summary = RunSummary::collect(&ctx, outcome);

    match config.output {
        OutputFormat::Text => {
            for line in summary.text_lines() {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).context("encoding run summary")?;
            println!("{json}");
        }
    }

    ctx.save(&config.dump_path)
        .with_context(|| format!("saving inventory to {}", config.dump_path.display()))?;

    Ok(())
}
