// SPDX-License-Identifier: MPL-2.0

//! Test program: List water heaters with their status and energy usage.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example list_devices -- <email> <password>
//! ```

use std::env;

use aosmith_lib::{Client, HotWaterStatus};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <email> <password>", args[0]);
        std::process::exit(1);
    }

    let client = Client::builder(&args[1], &args[2])
        .build_and_login()
        .await?;

    println!("Backend healthy: {}", client.is_everything_okay().await?);

    for device in client.get_devices().await? {
        let status = &device.status;
        println!();
        println!("{} ({}, {})", device.name, device.model, device.junction_id);
        println!("  Online:      {}", status.is_online);
        println!("  Mode:        {}", status.current_mode);
        println!(
            "  Setpoint:    {}°F (max {}°F)",
            status.temperature_setpoint, status.temperature_setpoint_maximum
        );
        match status.hot_water_status {
            Some(HotWaterStatus::Level(level)) => println!("  Hot water:   {level:?}"),
            Some(HotWaterStatus::Percentage(percent)) => println!("  Hot water:   {percent}%"),
            None => println!("  Hot water:   unknown"),
        }
        let modes: Vec<String> = device
            .supported_modes
            .iter()
            .map(|m| m.mode.to_string())
            .collect();
        println!("  Modes:       {}", modes.join(", "));

        let energy = client.get_energy_use_data(&device.junction_id).await?;
        println!("  Lifetime:    {:.1} kWh", energy.lifetime_kwh);
        if let Some(last) = energy.history.last() {
            println!("  Last period: {:.1} kWh ({})", last.energy_use_kwh, last.date);
        }
    }

    Ok(())
}
