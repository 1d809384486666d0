use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::Position;

/// Label shared by exactly two cards on a board, e.g. a colour.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardIdentity(Cow<'static, str>);

impl CardIdentity {
    pub const fn from_static(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for CardIdentity {
    fn from(label: &'static str) -> Self {
        Self::from_static(label)
    }
}

impl From<String> for CardIdentity {
    fn from(label: String) -> Self {
        Self(Cow::Owned(label))
    }
}

impl fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Player-visible state of a single card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardState {
    Hidden,
    Revealed,
    Matched,
}

impl CardState {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }

    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched)
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub position: Position,
    pub identity: CardIdentity,
    pub state: CardState,
}

impl Card {
    pub fn new(position: Position, identity: CardIdentity) -> Self {
        Self {
            position,
            identity,
            state: CardState::Hidden,
        }
    }

    /// The identity as a renderer may show it, `None` while face-down.
    pub fn visible_identity(&self) -> Option<&CardIdentity> {
        self.state.is_face_up().then_some(&self.identity)
    }
}
