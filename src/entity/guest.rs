//! Guest agent: needs, decisions and movement
//!
//! A guest is updated at two independent cadences:
//! - [`Guest::tick`] once per simulated tick: needs grow, mood is checked and
//!   the guest may decide to fetch food, fetch a drink or leave.
//! - [`Guest::move_step`] once per rendered frame: the guest walks toward its
//!   current destination or drifts around the room.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::NeedConfig;
use crate::core::types::{GuestId, ResourceKind};
use crate::entity::needs::{music_mood_effect, Needs};
use crate::entity::state::BehaviorState;
use crate::simulation::pantry::Pantry;
use crate::spatial::area::{Layout, Rect};
use crate::spatial::vector::{uniform, Vector};

/// Noise every guest makes just by being there
pub const BASE_LOUDNESS: f64 = 0.1;

/// Mood at or above which a guest never leaves
pub const CONTENT_MOOD: f64 = 0.75;
/// Mood at or below which a guest always leaves
pub const MISERABLE_MOOD: f64 = 0.1;
/// Scales mood into the chance of staying between the two thresholds
const STAY_FACTOR: f64 = 1.5;

/// Distance at which a destination counts as reached
pub const ARRIVAL_RADIUS: f64 = 2.0;

/// Everything a guest may read or draw from during its tick
pub struct TickContext<'a> {
    pub music_volume: f64,
    pub needs: &'a NeedConfig,
    pub pantry: &'a mut Pantry,
}

/// Decision a guest made during its tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GuestAction {
    /// Headed for the door
    StartedLeaving,
    /// Headed for a station and took `amount` from the pantry
    Fetched { kind: ResourceKind, amount: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    id: GuestId,
    name: String,
    pub(crate) needs: Needs,
    /// Re-rolled every tick; does not feed into mood yet
    music_affinity: f64,
    pub(crate) position: Vector,
    pub(crate) velocity: Vector,
    pub(crate) state: BehaviorState,
    target: Option<Vector>,
}

impl Guest {
    pub fn new(id: GuestId, name: String, needs: Needs, position: Vector, velocity: Vector) -> Self {
        Self {
            id,
            name,
            needs,
            music_affinity: 0.0,
            position,
            velocity,
            state: BehaviorState::Wandering,
            target: None,
        }
    }

    /// A freshly arrived guest with random needs, somewhere in the play area
    pub fn arrive<R: Rng + ?Sized>(id: GuestId, layout: &Layout, rng: &mut R) -> Self {
        let needs = Needs::random(rng);
        let music_affinity = uniform(rng, -0.5, 1.0);
        let position = layout.play_area.random_point(rng);
        let velocity = Vector::new(uniform(rng, -1.0, 1.0), uniform(rng, -1.0, 1.0));

        Self {
            music_affinity,
            ..Self::new(id, format!("Guest {}", id.0), needs, position, velocity)
        }
    }

    pub fn id(&self) -> GuestId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn needs(&self) -> &Needs {
        &self.needs
    }

    pub fn music_affinity(&self) -> f64 {
        self.music_affinity
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn state(&self) -> BehaviorState {
        self.state
    }

    pub fn target(&self) -> Option<Vector> {
        self.target
    }

    pub fn is_leaving(&self) -> bool {
        self.state == BehaviorState::Leaving
    }

    pub fn has_left(&self) -> bool {
        self.state == BehaviorState::Left
    }

    /// Mood in 0.0-1.0 given the music currently playing
    pub fn mood(&self, music_volume: f64) -> f64 {
        (1.0 - self.needs.mood_penalty() + music_mood_effect(music_volume)).clamp(0.0, 1.0)
    }

    /// Noise this guest adds to the party
    ///
    /// Stays near [`BASE_LOUDNESS`] until a need outgrows what the pantry
    /// holds, then climbs with the fifth power of the shortfall. Drunk guests
    /// are louder across the board.
    pub fn loudness(&self, pantry: &Pantry) -> f64 {
        let unmet = self.needs.hunger_loudness(pantry.get(ResourceKind::Food))
            + self.needs.thirst_loudness(pantry.get(ResourceKind::Drinks));
        (BASE_LOUDNESS + unmet) * (1.0 + self.needs.intoxication())
    }

    /// Roll whether the guest wants to go home
    pub fn wants_to_leave<R: Rng + ?Sized>(&self, music_volume: f64, rng: &mut R) -> bool {
        let mood = self.mood(music_volume);
        if mood >= CONTENT_MOOD {
            return false;
        }
        if mood <= MISERABLE_MOOD {
            return true;
        }
        rng.gen::<f64>() > (mood * STAY_FACTOR).min(1.0)
    }

    /// Take as much of a resource as the guest needs, limited by what the
    /// pantry holds. Returns the amount taken.
    pub fn consume(&mut self, kind: ResourceKind, pantry: &mut Pantry) -> f64 {
        let taken = pantry.withdraw(kind, self.needs.get(kind));
        self.needs.satisfy(kind, taken);
        taken
    }

    /// Per-tick update of needs and decisions
    ///
    /// Leaving and departed guests are skipped. Only an idle guest starts a
    /// new errand, so at most one action comes out of a tick.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        ctx: &mut TickContext<'_>,
        rng: &mut R,
    ) -> Option<GuestAction> {
        if self.state.is_departing() {
            return None;
        }

        self.needs.accumulate(ctx.needs, rng);
        self.music_affinity = uniform(rng, -0.1, 0.1).clamp(0.0, 1.0);

        let mut action = None;

        if self.wants_to_leave(ctx.music_volume, rng) && self.state.is_idle() {
            self.state = BehaviorState::Leaving;
            action = Some(GuestAction::StartedLeaving);
        }

        for kind in [ResourceKind::Food, ResourceKind::Drinks] {
            let roll: f64 = rng.gen();
            if roll < self.needs.get(kind) && self.state.is_idle() {
                self.state = BehaviorState::fetching(kind);
                let amount = self.consume(kind, ctx.pantry);
                action = Some(GuestAction::Fetched { kind, amount });
            }
        }

        action
    }

    /// Per-frame movement, `dt` in frames (1.0 = one step of unit speed)
    ///
    /// Guests that already left do not move.
    pub fn move_step<R: Rng + ?Sized>(&mut self, dt: f64, layout: &Layout, rng: &mut R) {
        match self.state {
            BehaviorState::Left => return,
            BehaviorState::Wandering => {
                self.target = None;
                self.wander(rng);
            }
            state => {
                if self.target.is_none() {
                    self.target = state.destination(layout).map(|area| area.random_point(rng));
                }
            }
        }

        if let Some(target) = self.target {
            self.velocity = (target - self.position).normalize();
        }

        self.position += self.velocity * dt;
        self.bounce(&layout.play_area);

        if let Some(target) = self.target {
            if self.position.distance(&target) < ARRIVAL_RADIUS {
                self.target = None;
                self.state = self.state.on_arrival();
            }
        }
    }

    /// Drift at half speed, swaying more the drunker the guest is
    fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let sway = self.needs.intoxication();
        let delta = Vector::new(uniform(rng, -sway, sway), uniform(rng, -sway, sway));
        self.velocity = (self.velocity + delta).normalize() / 2.0;
    }

    /// Flip velocity on each axis the guest has strayed past
    fn bounce(&mut self, area: &Rect) {
        if area.outside_horizontally(self.position.i) {
            self.velocity.i = -self.velocity.i;
        }
        if area.outside_vertically(self.position.j) {
            self.velocity.j = -self.velocity.j;
        }
    }
}
