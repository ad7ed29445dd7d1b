//! Core match logic. Keep this crate free of IO and platform concerns.

pub mod catalog;
pub mod config;
pub mod dice;
pub mod effects;
pub mod events;
pub mod player;
pub mod rng;
pub mod run;
pub mod state;

pub use catalog::*;
pub use config::*;
pub use dice::*;
pub use effects::*;
pub use events::*;
pub use player::*;
pub use rng::*;
pub use run::*;
pub use state::*;
