//! Example: Feeding the dashboard via a channel
//!
//! This example demonstrates how to integrate gaswatch into your own
//! application by pushing station snapshots through a channel.
//!
//! This is useful when you want to:
//! - Drive the dashboard from your own data producer
//! - Generate synthetic data for testing
//! - Bridge from any async source
//!
//! # Usage
//!
//! ```bash
//! cargo run --example channel_feed
//! ```

use std::thread;
use std::time::Duration;

use gaswatch::{ChannelSource, StationSim, TelemetryData, TelemetrySource};

fn main() {
    println!("Channel feed example");
    println!("Generating synthetic station snapshots...\n");

    // Create a channel source - this returns both a sender and the source
    let (tx, mut source) = ChannelSource::create("synthetic-station");

    // Spawn a thread that plays producer
    thread::spawn(move || {
        let mut sim = StationSim::with_seed(2024);

        loop {
            if tx.send(sim.tick()).is_err() {
                break; // Receiver dropped
            }
            thread::sleep(Duration::from_secs(1));
        }
    });

    // Poll the source in the main thread
    println!("Receiving snapshots (press Ctrl+C to stop):\n");

    loop {
        if let Some(snapshot) = source.poll() {
            if snapshot.is_empty() {
                continue;
            }
            let data = TelemetryData::from_snapshot(&snapshot);
            println!(
                "Station status: {} ",
                data.station_status().label()
            );
            for reading in &data.readings {
                println!(
                    "  {:<24} {:>10.2} {:<5} [{}]",
                    reading.spec.name,
                    reading.value,
                    reading.spec.unit,
                    reading.status.symbol()
                );
            }
            println!();
        }

        thread::sleep(Duration::from_millis(100));
    }
}
