// SPDX-License-Identifier: MPL-2.0

//! Hub overview example.
//!
//! Prints the configuration, entity states, and available services of a
//! Home Assistant hub.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example hass_overview -- <hub_url> [api_password]
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Hub without password
//! cargo run --example hass_overview -- http://192.168.1.10:8123
//!
//! # Hub with API password
//! cargo run --example hass_overview -- http://192.168.1.10:8123 secret
//! ```

use std::env;

use hass_rest::ClientConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let mut config = ClientConfig::new(&args[1]);
    if let Some(password) = args.get(2) {
        config = config.with_api_password(password);
    }
    let client = config.into_client()?;

    println!("Connecting to {}", client.base_url());

    let hub = client.get_config().await?;
    println!();
    println!("=== Configuration ===");
    println!("Version:    {}", hub.version);
    println!("Time zone:  {}", hub.time_zone);
    println!("Location:   {:.4}, {:.4}", hub.latitude, hub.longitude);
    if let Some(unit) = hub.temperature_unit() {
        println!("Temp unit:  {unit}");
    }
    println!("Components: {}", hub.components.len());

    let states = client.get_states().await?;
    println!();
    println!("=== States ({}) ===", states.len());
    for state in &states {
        let name = state.friendly_name().unwrap_or(&state.entity_id);
        println!("{:<40} {}", name, state.state);
    }

    let domains = client.get_services().await?;
    println!();
    println!("=== Services ===");
    for domain in &domains {
        for service in domain.services.values() {
            println!(
                "{}.{:<30} {}",
                service.domain, service.service_name, service.description
            );
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} <hub_url> [api_password]");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {program} http://192.168.1.10:8123");
    eprintln!("  {program} http://192.168.1.10:8123 secret");
}
