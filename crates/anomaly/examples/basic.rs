//! Basic example demonstrating price anomaly detection
//!
//! Run with: cargo run --example basic -p anomaly

use anomaly::{
    DetectionConfigBuilder, DetectionOrchestrator, DetectorKind, PriceSeries, SeriesDetector,
    SingleDayDetector,
};
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== anomaly Basic Examples ===\n");

    // Three months of quiet trading with a crash, a spike and a slow rally
    let mut closes = vec![100.0];
    for i in 1..90 {
        let r = match i {
            20 => -0.12,
            55 => 0.10,
            60..=70 => 0.01,
            _ => 0.008 * (1.7 * i as f64).sin(),
        };
        let last = closes[closes.len() - 1];
        closes.push(last * (1.0 + r));
    }
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad start date")?;
    let series = PriceSeries::daily(start, &closes)?;
    println!("Series: {} observations from {}\n", series.len(), start);

    // 1. A single detector on its own
    println!("1. Single-day detector (threshold=3.5)");
    let single = SingleDayDetector::new(3.5)?;
    for anomaly in single.detect(&series) {
        println!(
            "   {}  close={:.2}  return={:+.2}%  z={:.2}",
            anomaly.date,
            anomaly.close,
            anomaly.daily_return * 100.0,
            anomaly.z_score
        );
    }

    // 2. All detectors through the orchestrator
    println!("\n2. Orchestrator");
    let config = DetectionConfigBuilder::defaults()
        .mad_threshold(2.5)
        .rolling_threshold(2.0)
        .extreme_threshold(2.5)
        .persistent_threshold(0.5)
        .build()?;
    let bundle = DetectionOrchestrator::new(config)?.run(&series)?;
    for (kind, count) in bundle.counts() {
        println!("   {:<10} {} record(s)", kind, count);
    }
    for run in bundle.records(DetectorKind::Persistent) {
        println!("   run starting {}", run.primary_date());
    }

    // 3. Dates to look up in a news archive
    println!("\n3. Flagged dates");
    println!("   {:?}", bundle.query_keys());

    println!("\n=== Examples Complete ===");
    Ok(())
}
