use thiserror::Error;

use crate::{CardIdentity, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("A board needs at least one pair of cards")]
    Empty,
    #[error("Odd number of cards ({0}), every card needs a partner")]
    OddCardCount(usize),
    #[error("Too many cards ({0}), a board holds at most {max}", max = crate::MAX_CARDS)]
    TooManyCards(usize),
    #[error("Identity {identity} appears {count} times, expected exactly 2")]
    UnpairedIdentity {
        identity: CardIdentity,
        count: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Invalid position {0}")]
    InvalidPosition(Position),
}

pub type Result<T> = core::result::Result<T, GameError>;
