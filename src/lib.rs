//! House Party - discrete-time agent simulation of a house party
//!
//! Guests get hungry, thirsty and loud; the party keeps the food, drinks and
//! music going and ends when too many guests go home or the neighbor runs out
//! of patience.
//!
//! ```rust,no_run
//! use house_party::core::config::PartyConfig;
//! use house_party::simulation::Party;
//!
//! let mut party = Party::new(&PartyConfig::default())?;
//! party.adjust_volume(0.3);
//!
//! while party.is_running() {
//!     for _ in 0..60 {
//!         party.move_guests(1.0);
//!     }
//!     party.advance_tick();
//! }
//! # Ok::<(), house_party::core::error::PartyError>(())
//! ```

pub mod core;
pub mod entity;
pub mod simulation;
pub mod spatial;
