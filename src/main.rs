use anyhow::Result;
use colored::Colorize;
use tracing::info;

use options_analyzer::models::OptionSide;
use options_analyzer::{config, logging, processor, snapshot};

fn main() -> Result<()> {
    logging::init_logging();

    println!("{}", "=".repeat(60).blue());
    println!("{}", "Options Snapshot Analyzer".green().bold());
    println!("{}", "=".repeat(60).blue());
    println!();

    let snapshot_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::SNAPSHOT_FILE.to_string());
    let amount = config::DEFAULT_INVESTMENT_AMOUNT;

    // Step 1: Load the snapshot
    println!("{}", format!("Step 1: Loading snapshot from {}...", snapshot_path).cyan());
    let quotes = snapshot::load_snapshot(&snapshot_path)?;
    let symbols = processor::symbols(&quotes);
    println!(
        "{} {} quotes across {} symbols",
        "✓".green(),
        quotes.len(),
        symbols.len()
    );
    println!();

    let start_time = std::time::Instant::now();

    // Step 2: Covered-call and cash-secured-put ladders
    println!("{}", "Step 2: Building strike ladders...".cyan());
    let call_ladders = processor::build_ladders(&quotes, OptionSide::Call, amount)?;
    let put_ladders = processor::build_ladders(&quotes, OptionSide::Put, amount)?;
    snapshot::write_ladders(config::CALL_LADDER_FILE, &call_ladders)?;
    snapshot::write_ladders(config::PUT_LADDER_FILE, &put_ladders)?;
    println!(
        "{} {} call ladders → {}",
        "✓".green(),
        call_ladders.len(),
        config::CALL_LADDER_FILE.yellow()
    );
    println!(
        "{} {} put ladders → {}",
        "✓".green(),
        put_ladders.len(),
        config::PUT_LADDER_FILE.yellow()
    );
    println!();

    // Step 3: Vertical credit spreads
    println!("{}", "Step 3: Building credit spreads...".cyan());
    let call_spreads =
        processor::build_spreads(&quotes, OptionSide::Call, amount, config::SPREAD_RESULT_LIMIT)?;
    let put_spreads =
        processor::build_spreads(&quotes, OptionSide::Put, amount, config::SPREAD_RESULT_LIMIT)?;
    snapshot::write_spreads(config::CALL_SPREAD_FILE, &call_spreads)?;
    snapshot::write_spreads(config::PUT_SPREAD_FILE, &put_spreads)?;
    println!(
        "{} {} call spreads → {}",
        "✓".green(),
        call_spreads.len(),
        config::CALL_SPREAD_FILE.yellow()
    );
    println!(
        "{} {} put spreads → {}",
        "✓".green(),
        put_spreads.len(),
        config::PUT_SPREAD_FILE.yellow()
    );
    println!();

    let elapsed = start_time.elapsed();

    // Step 4: Summary
    println!("{}", "=".repeat(60).blue());
    println!("{}", "Summary".cyan().bold());
    println!("{}", "=".repeat(60).blue());
    println!("{} Time taken: {:.2}s", "⏱".yellow(), elapsed.as_secs_f64());

    if !call_ladders.is_empty() {
        println!();
        println!("{}", "Top call ladders (first 5):".cyan());
        for ladder in call_ladders.iter().take(5) {
            println!(
                "  {} {} @ {:.2} → rung 1 income {:.2}%",
                "✓".green(),
                ladder.symbol.yellow(),
                ladder.share_price,
                ladder.income_percent1.unwrap_or(0.0)
            );
        }
    }

    if !put_spreads.is_empty() {
        println!();
        println!("{}", "Top put spreads (first 5):".cyan());
        for spread in put_spreads.iter().take(5) {
            println!(
                "  {} {} sell {:.1} / buy {:.1} → EV {:.4}",
                "✓".green(),
                spread.symbol.yellow(),
                spread.strike_price_sell,
                spread.strike_price_buy,
                spread.spread_value
            );
        }
    }
    println!();

    let summary = serde_json::json!({
        "snapshot": snapshot_path,
        "quotes": quotes.len(),
        "symbols": symbols.len(),
        "callLadders": call_ladders.len(),
        "putLadders": put_ladders.len(),
        "callSpreads": call_spreads.len(),
        "putSpreads": put_spreads.len(),
        "elapsedSecs": elapsed.as_secs_f64(),
    });
    std::fs::write(config::SUMMARY_FILE, serde_json::to_string_pretty(&summary)?)?;
    info!(summary = %summary, "run complete");

    println!("{}", "=".repeat(60).blue());
    println!("{}", "Done!".green().bold());
    println!("{}", "=".repeat(60).blue());

    Ok(())
}
