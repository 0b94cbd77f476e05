pub mod area;
pub mod vector;

pub use area::{Layout, Rect};
pub use vector::Vector;
