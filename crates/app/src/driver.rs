//! Frame loop.

use std::thread;

use serde::Serialize;
use stockroom_products::Product;
use stockroom_reporting::Report;

use crate::catalog::CatalogTile;
use crate::config::AppConfig;
use crate::context::AppContext;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub ticks: u64,
    pub sales: u64,
    pub units_sold: u64,
    pub strategy_switches: u64,
}

/// Final state of a run, as printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub auto_buyer: &'static str,
    pub report: Report,
    pub catalog: Vec<CatalogTile>,
}

impl RunSummary {
    pub fn collect(ctx: &AppContext, outcome: RunOutcome) -> Self {
        Self {
            outcome,
            auto_buyer: ctx.auto_buyer().status_line(),
            report: ctx.report(),
            catalog: ctx.catalog(),
        }
    }

    /// Status line, report lines, then one `"{name} [{kind}]: {quantity}"` line per tile.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![self.auto_buyer.to_string()];
        lines.extend(self.report.lines().map(str::to_string));
        lines.extend(
            self.catalog
                .iter()
                .map(|t| format!("{} [{}]: {}", t.name, t.kind, t.quantity)),
        );
        lines
    }
}

/// Starting stock of a fresh process.
pub fn seed_catalog(ctx: &mut AppContext) {
    let inventory = ctx.inventory_mut();
    inventory.add(
        &Product::book(
            "Alphabets",
            "A book for kids to learn ABC",
            1.99,
            "Nguyen Van A",
            "Education Publishing House",
            "2023",
        ),
        20,
    );
    inventory.add(
        &Product::electronic(
            "iPhone 14 Pro Max",
            "Newest model from Apple",
            1099.0,
            "Apple",
            "2 years",
        ),
        5,
    );
}

/// Run `config.ticks` frames: simulate, rotate the report strategy on schedule,
/// and pace frames by `config.tick_interval`.
pub fn run(ctx: &mut AppContext, config: &AppConfig) -> RunOutcome {
    let mut outcome = RunOutcome::default();

    for frame in 1..=config.ticks {
        if let Some(sale) = ctx.tick() {
            outcome.sales += 1;
            outcome.units_sold += u64::from(sale.quantity);
        }

        if config.rotate_every > 0 && frame % config.rotate_every == 0 {
            ctx.next_strategy();
            outcome.strategy_switches += 1;
            let report = ctx.report();
            tracing::info!(frame, strategy = report.strategy, lines = ?report.summary, alert = ?report.alert, "report rotated");
        }

        if !config.tick_interval.is_zero() {
            thread::sleep(config.tick_interval);
        }
        outcome.ticks = frame;
    }

    tracing::info!(
        ticks = outcome.ticks,
        sales = outcome.sales,
        units_sold = outcome.units_sold,
        "run finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_simulation::AutoBuyer;

    #[test]
    fn seeds_the_demo_stock() {
        let mut ctx = AppContext::new(AutoBuyer::with_seed(0));
        seed_catalog(&mut ctx);
        let names: Vec<_> = ctx.catalog().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Alphabets", "iPhone 14 Pro Max"]);
        assert_eq!(ctx.inventory().total_quantity(), 25);
    }

    #[test]
    fn rotates_on_schedule_and_accounts_for_sales() {
        let config = AppConfig {
            ticks: 2_000,
            rotate_every: 500,
            seed: Some(11),
            ..AppConfig::default()
        };
        let mut ctx = AppContext::from_config(&config);
        seed_catalog(&mut ctx);

        let outcome = run(&mut ctx, &config);
        assert_eq!(outcome.ticks, 2_000);
        assert_eq!(outcome.strategy_switches, 4);
        assert_eq!(ctx.report().strategy, "TotalAll");
        assert!(ctx.inventory().total_quantity() >= 25u64.saturating_sub(outcome.units_sold));
        assert!(ctx.inventory().total_quantity() <= 25);
    }

    #[test]
    fn summary_renders_as_text_and_json() {
        let config = AppConfig {
            ticks: 0,
            auto_buy: false,
            seed: Some(1),
            ..AppConfig::default()
        };
        let mut ctx = AppContext::from_config(&config);
        seed_catalog(&mut ctx);
        let outcome = run(&mut ctx, &config);
        let summary = RunSummary::collect(&ctx, outcome);

        assert_eq!(
            summary.text_lines(),
            vec![
                "Auto Buyer disabled",
                "Inventory has 2 types",
                "with 25 products in total",
                "Alert on Total of all products",
                "No alert",
                "Alphabets [Book]: 20",
                "iPhone 14 Pro Max [Electronic]: 5",
            ]
        );

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["outcome"]["ticks"], 0);
        assert_eq!(json["report"]["strategy"], "TotalAll");
        assert_eq!(json["catalog"][1]["kind"], "Electronic");
        assert_eq!(json["catalog"][1]["quantity"], 5);
        assert_eq!(
            json["catalog"][0]["product_id"],
            ctx.catalog()[0].product_id.to_string()
        );
    }

    #[test]
    fn zero_ticks_does_nothing() {
        let config = AppConfig {
            ticks: 0,
            seed: Some(1),
            ..AppConfig::default()
        };
        let mut ctx = AppContext::from_config(&config);
        seed_catalog(&mut ctx);
        assert_eq!(run(&mut ctx, &config), RunOutcome::default());
        assert_eq!(ctx.inventory().total_quantity(), 25);
    }
}
