pub mod guest;
pub mod needs;
pub mod state;

pub use guest::{Guest, GuestAction, TickContext};
pub use needs::Needs;
pub use state::BehaviorState;
