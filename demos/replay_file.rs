//! Example: Replaying a recorded snapshot file
//!
//! Writes a canned station snapshot to disk, then polls it the way the TUI
//! does with `gaswatch --replay <file>`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example replay_file
//! ```

use std::fs;

use gaswatch::{FileSource, MetricId, StationSnapshot, TelemetryData, TelemetrySource};

fn main() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("gaswatch-replay-demo.json");

    // Record a snapshot with the gas reading pushed into the warning band
    let mut snapshot = StationSnapshot::default();
    snapshot.readings.insert(MetricId::GasConcentration, 74.5);
    snapshot.readings.insert(MetricId::SuctionPressure, 42.3);
    snapshot.readings.insert(MetricId::DischargePressure, 65.9);
    snapshot.readings.insert(MetricId::CompressorTemperature, 38.1);
    snapshot.readings.insert(MetricId::FlowRate, 85_340.0);

    fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
    println!("Wrote snapshot to {}\n", path.display());

    // Poll it back like the dashboard would
    let mut source = FileSource::new(&path);
    let replayed = source.poll().expect("snapshot should load");

    let data = TelemetryData::from_snapshot(&replayed);
    println!("Station status: {}", data.station_status().label());
    for reading in &data.readings {
        println!(
            "  {:<24} {:>10.2} {:<5} [{}]",
            reading.spec.name,
            reading.value,
            reading.spec.unit,
            reading.status.symbol()
        );
    }

    // A second poll without a file change returns nothing
    assert!(source.poll().is_none());

    fs::remove_file(&path)?;
    Ok(())
}
