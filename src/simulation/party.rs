//! Party - owns the guests and shared resources and drives the simulation
//!
//! Two entry points advance the party at independent cadences:
//! [`Party::advance_tick`] once per simulated tick (needs, decisions,
//! departures, game over) and [`Party::move_guests`] once per rendered frame.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::calendar::{PartyClock, SimTime};
use crate::core::config::{NeedConfig, PartyConfig};
use crate::core::error::Result;
use crate::core::types::{GuestId, ResourceKind, Tick};
use crate::entity::guest::{Guest, GuestAction, TickContext};
use crate::simulation::events::{GameOverReason, PartyEvent};
use crate::simulation::neighbor::Neighbor;
use crate::simulation::pantry::Pantry;
use crate::spatial::area::Layout;

/// Lifecycle of a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Waiting for the music to start; ticks and movement are ignored
    Stopped,
    Running,
    /// Terminal; every command is ignored from here on
    GameOver(GameOverReason),
}

pub struct Party {
    guests: Vec<Guest>,
    original_guest_count: usize,
    music_volume: f64,
    pantry: Pantry,
    neighbor: Neighbor,
    clock: PartyClock,
    current_tick: Tick,
    run_state: RunState,
    needs: NeedConfig,
    layout: Layout,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Party {
    /// Invite `config.guest_count` guests with random needs and positions
    pub fn new(config: &PartyConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let guests = (0..config.guest_count)
            .map(|i| Guest::arrive(GuestId::new(i), &config.layout, &mut rng))
            .collect();

        Ok(Self::assemble(config, guests, seed, rng))
    }

    /// Start a party with a prepared guest list
    ///
    /// The roster replaces `config.guest_count`: it sets both the original
    /// guest count and the pantry capacity.
    pub fn with_guests(config: &PartyConfig, guests: Vec<Guest>) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Ok(Self::assemble(config, guests, seed, rng))
    }

    fn assemble(config: &PartyConfig, guests: Vec<Guest>, seed: u64, rng: ChaCha8Rng) -> Self {
        tracing::info!(
            "Party set up with {} guests (seed {})",
            guests.len(),
            seed
        );

        // Sized from the roster actually invited, not the configured count
        let capacity = config.supply_capacity(guests.len());

        Self {
            original_guest_count: guests.len(),
            guests,
            music_volume: config.initial_volume,
            pantry: Pantry::stocked(capacity),
            neighbor: Neighbor::new(&config.neighbor),
            clock: PartyClock::new(&config.clock),
            current_tick: 0,
            run_state: RunState::Stopped,
            needs: config.needs.clone(),
            layout: config.layout.clone(),
            seed,
            rng,
        }
    }

    // === COMMANDS ===

    /// Start the party regardless of volume. Only a stopped party starts.
    pub fn start(&mut self) {
        if self.run_state == RunState::Stopped {
            self.run_state = RunState::Running;
            tracing::info!("Party started at {}", self.current_time());
        }
    }

    /// Change the music volume by `delta`, clamped to 0.0-1.0
    ///
    /// Turning the music up on a stopped party starts it; turning it down or
    /// leaving it unchanged does not. Returns the new volume.
    pub fn adjust_volume(&mut self, delta: f64) -> f64 {
        if self.is_game_over() {
            return self.music_volume;
        }

        let previous = self.music_volume;
        self.music_volume = (self.music_volume + delta).clamp(0.0, 1.0);
        tracing::debug!("Music volume now {:.2}", self.music_volume);

        if self.is_stopped() && self.music_volume > previous {
            self.start();
        }
        self.music_volume
    }

    /// Set the music to `volume` (clamped to 0.0-1.0) and start a stopped
    /// party if anything is playing. Returns the new volume.
    pub fn open_at_volume(&mut self, volume: f64) -> f64 {
        if self.is_game_over() {
            return self.music_volume;
        }

        self.music_volume = volume.clamp(0.0, 1.0);
        if self.music_volume > 0.0 {
            self.start();
        }
        self.music_volume
    }

    /// Restock food up to capacity, returns the amount actually added
    pub fn add_food(&mut self, amount: f64) -> f64 {
        self.restock(ResourceKind::Food, amount)
    }

    /// Restock drinks up to capacity, returns the amount actually added
    pub fn add_drinks(&mut self, amount: f64) -> f64 {
        self.restock(ResourceKind::Drinks, amount)
    }

    fn restock(&mut self, kind: ResourceKind, amount: f64) -> f64 {
        if self.is_game_over() {
            return 0.0;
        }
        if amount < 0.0 {
            tracing::warn!("Ignoring negative restock of {} ({})", kind, amount);
        }
        self.pantry.add(kind, amount)
    }

    /// Take up to `amount` food, returns what was actually taken
    pub fn consume_food(&mut self, amount: f64) -> f64 {
        self.consume(ResourceKind::Food, amount)
    }

    /// Take up to `amount` drinks, returns what was actually taken
    pub fn consume_drinks(&mut self, amount: f64) -> f64 {
        self.consume(ResourceKind::Drinks, amount)
    }

    fn consume(&mut self, kind: ResourceKind, amount: f64) -> f64 {
        if self.is_game_over() {
            return 0.0;
        }
        self.pantry.withdraw(kind, amount)
    }

    /// Advance the party by one tick
    ///
    /// Guests are ticked in roster order, so earlier guests get first pick of
    /// the pantry. Guests who walked out since the last tick are dropped,
    /// then the game over conditions are checked. Does nothing unless the
    /// party is running.
    pub fn advance_tick(&mut self) -> Vec<PartyEvent> {
        let mut events = Vec::new();
        if !self.is_running() {
            return events;
        }

        self.current_tick += 1;

        let mut ctx = TickContext {
            music_volume: self.music_volume,
            needs: &self.needs,
            pantry: &mut self.pantry,
        };

        for guest in &mut self.guests {
            let Some(action) = guest.tick(&mut ctx, &mut self.rng) else {
                continue;
            };

            let event = match action {
                GuestAction::StartedLeaving => PartyEvent::StartedLeaving { guest: guest.id() },
                GuestAction::Fetched { kind, amount } => {
                    PartyEvent::fetched(guest.id(), kind, amount)
                }
            };
            tracing::debug!("{}: {}", guest.name(), event);
            events.push(event);
        }

        self.guests.retain(|guest| {
            if guest.has_left() {
                tracing::debug!("{}: left the party", guest.name());
                events.push(PartyEvent::Left { guest: guest.id() });
                false
            } else {
                true
            }
        });

        if let Some(reason) = self.check_game_over() {
            self.run_state = RunState::GameOver(reason);
            tracing::info!(
                "GAME OVER at {} (tick {}): {}",
                self.current_time(),
                self.current_tick,
                reason
            );
            events.push(PartyEvent::GameOver {
                tick: self.current_tick,
                reason,
            });
        }

        events
    }

    /// Move every guest by one frame step (`dt` in frames)
    ///
    /// Only a running party moves. Guests who already left stay put until
    /// the next tick removes them.
    pub fn move_guests(&mut self, dt: f64) {
        if !self.is_running() {
            return;
        }
        for guest in &mut self.guests {
            guest.move_step(dt, &self.layout, &mut self.rng);
        }
    }

    fn check_game_over(&self) -> Option<GameOverReason> {
        if self.is_guest_count_too_low() {
            return Some(GameOverReason::TooFewGuests);
        }
        if self.total_noise_level() > self.noise_tolerance() {
            return Some(GameOverReason::NoiseComplaint);
        }
        None
    }

    fn is_guest_count_too_low(&self) -> bool {
        self.guests.len() < self.original_guest_count / 3
    }

    // === QUERIES ===

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_stopped(&self) -> bool {
        self.run_state == RunState::Stopped
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.run_state, RunState::GameOver(_))
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.run_state {
            RunState::GameOver(reason) => Some(reason),
            RunState::Stopped | RunState::Running => None,
        }
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Simulated time of day for the current tick
    pub fn current_time(&self) -> SimTime {
        self.clock.time_at(self.current_tick)
    }

    /// Live guests in roster order
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    pub fn original_guest_count(&self) -> usize {
        self.original_guest_count
    }

    pub fn music_volume(&self) -> f64 {
        self.music_volume
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn neighbor(&self) -> &Neighbor {
        &self.neighbor
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Seed of the party's random stream, for replaying a session
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Neighbor's tolerance right now
    pub fn noise_tolerance(&self) -> f64 {
        self.neighbor.tolerance_at(self.current_tick)
    }

    /// Music plus every live guest's loudness, whatever they are doing
    pub fn total_noise_level(&self) -> f64 {
        let guests: f64 = self.guests.iter().map(|g| g.loudness(&self.pantry)).sum();
        self.music_volume + guests
    }

    /// Average mood of the guests who are not on their way out
    ///
    /// 0.0 when nobody is left to ask.
    pub fn total_mood(&self) -> f64 {
        let (sum, count) = self
            .guests
            .iter()
            .filter(|g| !g.is_leaving())
            .fold((0.0, 0usize), |(sum, count), g| {
                (sum + g.mood(self.music_volume), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    /// Noise relative to the neighbor's tolerance; above 1.0 ends the party
    ///
    /// Not capped. Once the tolerance has run out this is infinite.
    pub fn relative_noise_level(&self) -> f64 {
        let tolerance = self.noise_tolerance();
        if tolerance <= 0.0 {
            return f64::INFINITY;
        }
        self.total_noise_level() / tolerance
    }

    pub fn relative_food_amount(&self) -> f64 {
        self.pantry.relative(ResourceKind::Food)
    }

    pub fn relative_drinks_amount(&self) -> f64 {
        self.pantry.relative(ResourceKind::Drinks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::needs::Needs;
    use crate::entity::state::BehaviorState;
    use crate::spatial::vector::Vector;

    fn config(guests: u32) -> PartyConfig {
        PartyConfig {
            guest_count: guests,
            seed: Some(7),
            ..PartyConfig::default()
        }
    }

    fn calm_guest(id: u32) -> Guest {
        Guest::new(
            GuestId::new(id),
            format!("Guest {}", id),
            Needs::new(0.0, 0.0, 0.0),
            Vector::new(400.0, 300.0),
            Vector::new(1.0, 0.0),
        )
    }

    #[test]
    fn test_new_party_is_stopped_and_stocked() {
        let party = Party::new(&config(10)).unwrap();

        assert!(party.is_stopped());
        assert_eq!(party.guest_count(), 10);
        assert_eq!(party.original_guest_count(), 10);
        assert_eq!(party.pantry().capacity(ResourceKind::Food), 5.0);
        assert_eq!(party.relative_food_amount(), 1.0);
        assert_eq!(party.relative_drinks_amount(), 1.0);
        assert_eq!(party.current_tick(), 0);
        assert_eq!(party.seed(), 7);
    }

    #[test]
    fn test_same_seed_same_party() {
        let a = Party::new(&config(5)).unwrap();
        let b = Party::new(&config(5)).unwrap();
        for (ga, gb) in a.guests().iter().zip(b.guests()) {
            assert_eq!(ga.position(), gb.position());
            assert_eq!(ga.needs(), gb.needs());
        }
    }

    #[test]
    fn test_volume_up_starts_party() {
        let mut party = Party::new(&config(15)).unwrap();
        assert!(party.is_stopped());

        party.adjust_volume(0.1);

        assert!(party.is_running());
        assert_eq!(party.music_volume(), 0.1);
    }

    #[test]
    fn test_volume_down_does_not_start_party() {
        let mut party = Party::new(&config(15)).unwrap();
        party.adjust_volume(-0.1);
        assert!(party.is_stopped());
        assert_eq!(party.music_volume(), 0.0);
    }

    #[test]
    fn test_volume_clamped() {
        let mut party = Party::new(&config(3)).unwrap();
        assert_eq!(party.adjust_volume(5.0), 1.0);
        assert_eq!(party.adjust_volume(-5.0), 0.0);
        // Silence does not stop a running party
        assert!(party.is_running());
    }

    #[test]
    fn test_lowering_volume_does_not_start_party() {
        let mut cfg = config(5);
        cfg.initial_volume = 0.5;
        let mut party = Party::new(&cfg).unwrap();
        assert!(party.is_stopped());

        assert_eq!(party.adjust_volume(-0.1), 0.4);
        assert!(party.is_stopped());

        assert_eq!(party.adjust_volume(0.0), 0.4);
        assert!(party.is_stopped());

        party.adjust_volume(0.1);
        assert!(party.is_running());
    }

    #[test]
    fn test_volume_up_at_max_does_not_start_party() {
        let mut cfg = config(5);
        cfg.initial_volume = 1.0;
        let mut party = Party::new(&cfg).unwrap();

        assert_eq!(party.adjust_volume(0.1), 1.0);
        assert!(party.is_stopped());
    }

    #[test]
    fn test_open_at_volume_replaces_configured_volume() {
        let mut cfg = config(5);
        cfg.initial_volume = 0.5;

        let mut party = Party::new(&cfg).unwrap();
        assert_eq!(party.open_at_volume(0.3), 0.3);
        assert!(party.is_running());

        let mut quiet = Party::new(&cfg).unwrap();
        assert_eq!(quiet.open_at_volume(0.0), 0.0);
        assert!(quiet.is_stopped());

        let mut loud = Party::new(&cfg).unwrap();
        assert_eq!(loud.open_at_volume(3.0), 1.0);
    }

    #[test]
    fn test_prepared_roster_sizes_the_pantry() {
        let party = Party::with_guests(&config(10), vec![calm_guest(0), calm_guest(1)]).unwrap();

        assert_eq!(party.original_guest_count(), 2);
        assert_eq!(party.pantry().capacity(ResourceKind::Food), 1.0);
        assert_eq!(party.pantry().capacity(ResourceKind::Drinks), 1.0);
    }

    #[test]
    fn test_start_explicitly() {
        let mut party = Party::new(&config(3)).unwrap();
        party.start();
        assert!(party.is_running());
        assert_eq!(party.music_volume(), 0.0);
    }

    #[test]
    fn test_stopped_party_ignores_ticks_and_frames() {
        let mut party = Party::new(&config(4)).unwrap();
        let before: Vec<Vector> = party.guests().iter().map(|g| g.position()).collect();

        assert!(party.advance_tick().is_empty());
        party.move_guests(1.0);

        assert_eq!(party.current_tick(), 0);
        let after: Vec<Vector> = party.guests().iter().map(|g| g.position()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_restock_clamped_to_capacity() {
        let mut party = Party::new(&config(10)).unwrap();

        assert_eq!(party.consume_food(3.0), 3.0);
        assert_eq!(party.add_food(1.0), 1.0);
        assert_eq!(party.pantry().get(ResourceKind::Food), 3.0);
        assert_eq!(party.add_food(10.0), 2.0);
        assert_eq!(party.pantry().get(ResourceKind::Food), 5.0);

        assert_eq!(party.add_drinks(-1.0), 0.0);
        assert_eq!(party.pantry().get(ResourceKind::Drinks), 5.0);
    }

    #[test]
    fn test_consume_clamped_to_stock() {
        let mut party = Party::new(&config(2)).unwrap();
        assert_eq!(party.consume_drinks(0.4), 0.4);
        assert_eq!(party.consume_drinks(5.0), 0.6);
        assert_eq!(party.consume_drinks(1.0), 0.0);
        assert_eq!(party.pantry().get(ResourceKind::Drinks), 0.0);
    }

    #[test]
    fn test_relative_noise_no_guests_full_volume() {
        let mut party = Party::with_guests(&config(10), Vec::new()).unwrap();
        party.adjust_volume(1.0);

        assert_eq!(party.total_noise_level(), 1.0);
        assert_eq!(party.relative_noise_level(), 1.0 / party.neighbor().base_tolerance());
    }

    #[test]
    fn test_noise_counts_every_guest() {
        let mut guests = vec![calm_guest(0), calm_guest(1)];
        guests[1].state = BehaviorState::Leaving;
        let mut party = Party::with_guests(&config(10), guests).unwrap();
        party.adjust_volume(0.5);

        let expected = 0.5 + 2.0 * crate::entity::guest::BASE_LOUDNESS;
        assert!((party.total_noise_level() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_total_mood_skips_leaving_guests() {
        let mut guests = vec![calm_guest(0), calm_guest(1), calm_guest(2)];
        guests[1].needs = Needs::new(0.5, 0.5, 0.0);
        guests[2].state = BehaviorState::Leaving;
        guests[2].needs = Needs::new(3.0, 3.0, 0.0);

        let mut party = Party::with_guests(&config(10), guests).unwrap();
        party.adjust_volume(0.5);

        let v = party.music_volume();
        let expected = (party.guests()[0].mood(v) + party.guests()[1].mood(v)) / 2.0;
        assert!((party.total_mood() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_total_mood_empty_is_zero() {
        let party = Party::with_guests(&config(10), Vec::new()).unwrap();
        assert_eq!(party.total_mood(), 0.0);
    }

    #[test]
    fn test_tick_advances_time() {
        let mut party = Party::new(&config(15)).unwrap();
        party.adjust_volume(0.5);

        party.advance_tick();

        assert_eq!(party.current_tick(), 1);
        assert_eq!(party.current_time().to_string(), "18:10");
    }

    #[test]
    fn test_left_guests_removed_on_tick() {
        let mut guests = vec![calm_guest(0), calm_guest(1), calm_guest(2)];
        guests[1].state = BehaviorState::Left;
        let mut party = Party::with_guests(&config(3), guests).unwrap();
        party.adjust_volume(1.0);

        let events = party.advance_tick();

        assert_eq!(party.guest_count(), 2);
        assert!(events.contains(&PartyEvent::Left { guest: GuestId::new(1) }));
        assert!(party.guests().iter().all(|g| g.id() != GuestId::new(1)));
    }

    #[test]
    fn test_game_over_when_too_few_guests() {
        // Six invited, five out of the door: 1 < 6 / 3
        let mut guests: Vec<Guest> = (0..6).map(calm_guest).collect();
        for g in guests.iter_mut().take(5) {
            g.state = BehaviorState::Left;
        }
        let mut party = Party::with_guests(&config(6), guests).unwrap();
        party.adjust_volume(1.0);

        let events = party.advance_tick();

        assert_eq!(party.guest_count(), 1);
        assert_eq!(party.game_over_reason(), Some(GameOverReason::TooFewGuests));
        assert!(events.last().is_some_and(|e| e.is_game_over()));
    }

    #[test]
    fn test_game_over_on_noise_complaint() {
        let mut cfg = config(10);
        cfg.neighbor.base_tolerance = 0.5;
        let mut party = Party::with_guests(&cfg, (0..10).map(calm_guest).collect()).unwrap();
        party.adjust_volume(1.0);

        party.advance_tick();

        assert_eq!(party.game_over_reason(), Some(GameOverReason::NoiseComplaint));
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut cfg = config(10);
        cfg.neighbor.base_tolerance = 0.5;
        let mut party = Party::new(&cfg).unwrap();
        party.adjust_volume(1.0);
        party.advance_tick();
        assert!(party.is_game_over());

        let tick = party.current_tick();
        let volume = party.music_volume();
        let food = party.pantry().get(ResourceKind::Food);
        let positions: Vec<Vector> = party.guests().iter().map(|g| g.position()).collect();

        assert!(party.advance_tick().is_empty());
        party.move_guests(1.0);
        party.adjust_volume(-0.5);
        party.start();
        assert_eq!(party.consume_food(1.0), 0.0);
        assert_eq!(party.add_food(1.0), 0.0);

        assert!(party.is_game_over());
        assert_eq!(party.current_tick(), tick);
        assert_eq!(party.music_volume(), volume);
        assert_eq!(party.pantry().get(ResourceKind::Food), food);
        let after: Vec<Vector> = party.guests().iter().map(|g| g.position()).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_roster_order_decides_who_eats() {
        // Two starving guests, food for one: the first in the roster gets it
        let mut cfg = config(2);
        cfg.supply_per_guest = 0.5;
        let mut guests = vec![calm_guest(0), calm_guest(1)];
        guests[0].needs = Needs::new(1.0, 0.0, 0.0);
        guests[1].needs = Needs::new(1.0, 0.0, 0.0);
        let mut party = Party::with_guests(&cfg, guests).unwrap();
        party.adjust_volume(1.0);

        let events = party.advance_tick();

        let ate: Vec<(GuestId, f64)> = events
            .iter()
            .filter_map(|e| match e {
                PartyEvent::Ate { guest, amount } => Some((*guest, *amount)),
                _ => None,
            })
            .collect();
        assert_eq!(ate.len(), 2);
        assert_eq!(ate[0].0, GuestId::new(0));
        assert_eq!(ate[0].1, 1.0);
        assert_eq!(ate[1].1, 0.0);
        assert_eq!(party.pantry().get(ResourceKind::Food), 0.0);
    }
}
