//! Basic example demonstrating data crate functionality
//!
//! Run with: cargo run --example basic -p data
//!
//! Reads a small in-memory history in the layout of a downloaded daily
//! price file, then derives closes and returns.

use data::{closing_points, daily_returns, CsvPriceSource, LoadConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Data Crate Example ===\n");

    let history = "\
Date,Open,High,Low,Close,Volume
2024-01-02 00:00:00-05:00,187.15,188.44,183.89,185.64,82488700
2024-01-03 00:00:00-05:00,184.22,185.88,183.43,184.25,58414500
2024-01-04 00:00:00-05:00,182.15,183.09,180.88,181.91,71983600
2024-01-05 00:00:00-05:00,181.99,182.76,180.17,181.18,62303300
2024-01-08 00:00:00-05:00,182.09,185.60,181.50,185.56,59144500
";

    let quotes = CsvPriceSource::read_from(history.as_bytes(), &LoadConfig::default())?;
    println!("Loaded {} quotes\n", quotes.len());

    println!("{:<12} {:>10} {:>12}", "Date", "Close", "Volume");
    for quote in &quotes {
        println!(
            "{:<12} {:>10.2} {:>12}",
            quote.date_string(),
            quote.close,
            quote.volume.map(|v| v.to_string()).unwrap_or_default()
        );
    }

    let points = closing_points(&quotes);
    let closes: Vec<f64> = points.iter().map(|(_, c)| *c).collect();
    println!("\nDaily returns:");
    for ((date, _), r) in points.iter().skip(1).zip(daily_returns(&closes)) {
        println!("  {}  {:+.3}%", date, r * 100.0);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
