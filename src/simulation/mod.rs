pub mod events;
pub mod neighbor;
pub mod pantry;
pub mod party;
pub mod status;

pub use events::{GameOverReason, PartyEvent};
pub use party::{Party, RunState};
pub use status::{GuestSnapshot, PartyStatus};
