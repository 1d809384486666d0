#![no_std]

//! Game state for a pair-matching memory game.
//!
//! A [`MatchEngine`] holds the board and consumes player selections one at a time. Mismatched
//! pairs stay face-up until the host fires their revert, which [`GameSession`] arranges through
//! a [`RevertScheduler`] while keeping the best score in a [`BestScoreStore`].

extern crate alloc;

pub use card::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use schedule::*;
pub use score::*;
pub use session::*;
pub use shuffle::*;
pub use types::*;

mod card;
mod deck;
mod engine;
mod error;
mod schedule;
mod score;
mod session;
mod shuffle;
mod types;
