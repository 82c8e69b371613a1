//! Performance benchmarks for anomaly-core

use std::hint::black_box;
use std::time::Instant;

use anomaly_api::DetectionConfig;
use anomaly_core::robust::modified_z_scores;
use anomaly_core::{
    DetectionOrchestrator, ExtremeWindowDetector, PersistentRunDetector, SingleDayDetector,
    TrendDetector,
};
use anomaly_spi::{PriceSeries, SeriesDetector};
use chrono::NaiveDate;

fn generate_series(n: usize) -> PriceSeries {
    let mut price = 100.0;
    let closes: Vec<f64> = (0..n)
        .map(|i| {
            price *= 1.0 + 0.01 * (1.7 * i as f64).sin();
            price
        })
        .collect();
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    PriceSeries::daily(start, &closes).unwrap()
}

fn bench<F, R>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut() -> R,
{
    // Warmup
    for _ in 0..3 {
        black_box(f());
    }

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:32} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== Anomaly Core Performance Benchmarks ===\n");

    let series_1k = generate_series(1_000);
    let series_10k = generate_series(10_000);
    let returns_10k = series_10k.returns();

    println!("--- Robust scoring ---");
    bench("modified z (10K)", 100, || modified_z_scores(&returns_10k));

    println!("\n--- Detectors (10K) ---");
    let single = SingleDayDetector::new(3.5).unwrap();
    bench("SingleDay detect", 100, || single.detect(&series_10k));
    let trend = TrendDetector::new(5, 3.5).unwrap();
    bench("Trend detect", 20, || trend.detect(&series_10k));
    let extreme = ExtremeWindowDetector::new(3, 3.5).unwrap();
    bench("ExtremeWindow detect", 100, || extreme.detect(&series_10k));
    let persistent = PersistentRunDetector::new(7, 3.5).unwrap();
    bench("PersistentRun detect", 100, || persistent.detect(&series_10k));

    println!("\n--- Orchestrator ---");
    let orchestrator = DetectionOrchestrator::new(DetectionConfig::default()).unwrap();
    bench("run (1K)", 100, || orchestrator.run(&series_1k).unwrap());
    bench("run (10K)", 20, || orchestrator.run(&series_10k).unwrap());
    bench("run_parallel (10K)", 20, || {
        orchestrator.run_parallel(&series_10k).unwrap()
    });

    println!("\n=== Benchmarks Complete ===");
}
