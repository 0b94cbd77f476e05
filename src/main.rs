//! House Party - Entry Point
//!
//! Terminal driver for the party simulation. It plays the part of the game
//! screen: it moves guests between ticks, forwards the volume and restock
//! buttons as commands, and prints the meters.

use clap::Parser;
use house_party::core::config::PartyConfig;
use house_party::core::error::Result;
use house_party::simulation::{GuestSnapshot, Party, PartyEvent};
use tracing_subscriber::EnvFilter;

use std::io::{self, Write};
use std::path::PathBuf;

/// House party simulation - keep the guests happy without waking the neighbor
#[derive(Parser, Debug)]
#[command(name = "house-party")]
#[command(about = "Run a house party simulation interactively or as a headless batch")]
struct Args {
    /// TOML config file (missing keys use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of invited guests (overrides config)
    #[arg(long)]
    guests: Option<u32>,

    /// Random seed for reproducible runs (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Music volume to open with (0.0-1.0, replaces the config value);
    /// anything above zero starts the party
    #[arg(long, default_value_t = 0.3)]
    volume: f64,

    /// Run this many ticks headless instead of the interactive loop
    #[arg(long)]
    ticks: Option<u64>,

    /// Movement frames simulated between two ticks
    #[arg(long, default_value_t = 60)]
    frames_per_tick: u32,

    /// Print status lines as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("house_party=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PartyConfig::load(path)?,
        None => PartyConfig::default(),
    };
    if let Some(guests) = args.guests {
        config.guest_count = guests;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut party = Party::new(&config)?;
    party.open_at_volume(args.volume);

    match args.ticks {
        Some(ticks) => run_headless(&mut party, ticks, &args),
        None => run_interactive(&mut party, &config, &args),
    }
}

/// Frames then a tick, the way the game screen interleaves them
fn step(party: &mut Party, frames: u32) -> Vec<PartyEvent> {
    for _ in 0..frames {
        party.move_guests(1.0);
    }
    party.advance_tick()
}

fn run_headless(party: &mut Party, ticks: u64, args: &Args) -> Result<()> {
    tracing::info!("Running {} ticks headless (seed {})", ticks, party.seed());

    for _ in 0..ticks {
        if !party.is_running() {
            break;
        }
        let events = step(party, args.frames_per_tick);
        print_events(&events);
        print_status(party, args.json)?;
    }

    let status = party.status();
    if args.json {
        println!("{}", status.to_json()?);
    } else {
        println!("Final: {}", status.summary());
        if let Some(reason) = status.game_over_reason() {
            println!("Party over: {}", reason);
        }
    }
    Ok(())
}

fn run_interactive(party: &mut Party, config: &PartyConfig, args: &Args) -> Result<()> {
    println!("\n=== HOUSE PARTY ===");
    println!("Keep the guests fed, watered and dancing without waking the neighbor");
    println!();
    println!("Commands:");
    println!("  tick / t        - Advance the party by one tick");
    println!("  run <n>         - Run n ticks");
    println!("  up / down       - Turn the music up or down");
    println!("  food / drinks   - Restock food or drinks");
    println!("  guests / g      - List guests and what they are doing");
    println!("  status / s      - Show the meters");
    println!("  quit / q        - Leave the party");
    println!();

    loop {
        println!("{}", party.status().summary());

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            "" => continue,
            "quit" | "q" => break,
            "tick" | "t" => {
                if party.is_stopped() {
                    println!("The party hasn't started. Turn the music up first.");
                    continue;
                }
                let events = step(party, args.frames_per_tick);
                print_events(&events);
            }
            "up" => {
                party.adjust_volume(config.volume_step);
            }
            "down" => {
                party.adjust_volume(-config.volume_step);
            }
            "food" => {
                let added = party.add_food(config.restock_amount);
                println!("Added {:.2} food", added);
            }
            "drinks" => {
                let added = party.add_drinks(config.restock_amount);
                println!("Added {:.2} drinks", added);
            }
            "status" | "s" => {
                let status = party.status();
                println!(
                    "Noise {:.2} / tolerance {:.2}",
                    status.noise_level, status.noise_tolerance
                );
                print_status(party, args.json)?;
            }
            "guests" | "g" => {
                for guest in GuestSnapshot::roster(party) {
                    println!(
                        "  {:<10} {:<14} at ({:>6.1}, {:>6.1}) mood {:.0}%",
                        guest.name,
                        guest.state.to_string(),
                        guest.position.i,
                        guest.position.j,
                        guest.mood * 100.0
                    );
                }
            }
            _ => match input.strip_prefix("run ").map(|n| n.trim().parse::<u64>()) {
                Some(Ok(n)) => {
                    println!("Running {} ticks...", n);
                    for _ in 0..n {
                        if !party.is_running() {
                            break;
                        }
                        let events = step(party, args.frames_per_tick);
                        print_events(&events);
                    }
                    println!("Completed. Now at tick {}.", party.current_tick());
                }
                Some(Err(_)) => println!("Usage: run <number>"),
                None => println!("Unknown command: {}", input),
            },
        }

        if party.is_game_over() {
            println!("{}", party.status().summary());
            println!("The party is over. Thanks for hosting!");
            break;
        }
    }

    Ok(())
}

fn print_events(events: &[PartyEvent]) {
    for event in events {
        match event {
            PartyEvent::GameOver { .. } => println!("*** {} ***", event),
            _ => println!("  {}", event),
        }
    }
}

fn print_status(party: &Party, json: bool) -> Result<()> {
    let status = party.status();
    if json {
        println!("{}", status.to_json()?);
    } else {
        println!("{}", status.summary());
    }
    Ok(())
}
