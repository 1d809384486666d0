use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;

/// Colours of the classic twelve-card board.
pub const CLASSIC_COLORS: [CardIdentity; 6] = [
    CardIdentity::from_static("red"),
    CardIdentity::from_static("blue"),
    CardIdentity::from_static("green"),
    CardIdentity::from_static("orange"),
    CardIdentity::from_static("purple"),
    CardIdentity::from_static("yellow"),
];

/// The fixed identity multiset a game is dealt from.
///
/// Always holds a valid pairing: every identity exactly twice.
/// Serialized as the bare identity list and validated again when read back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardIdentity>", into = "Vec<CardIdentity>")]
pub struct DeckConfig {
    identities: Vec<CardIdentity>,
    pairs: PairCount,
}

impl DeckConfig {
    pub fn new(identities: Vec<CardIdentity>) -> Result<Self> {
        let pairs = validate_identities(&identities)?;
        Ok(Self { identities, pairs })
    }

    /// Builds a deck holding two cards of every label.
    pub fn from_pairs<I>(labels: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<CardIdentity>,
    {
        let identities = labels
            .into_iter()
            .map(Into::into)
            .flat_map(|identity: CardIdentity| [identity.clone(), identity])
            .collect();
        Self::new(identities)
    }

    pub fn classic() -> Self {
        let identities: Vec<_> = CLASSIC_COLORS
            .iter()
            .chain(CLASSIC_COLORS.iter())
            .cloned()
            .collect();
        Self {
            pairs: CLASSIC_COLORS.len() as PairCount,
            identities,
        }
    }

    pub fn identities(&self) -> &[CardIdentity] {
        &self.identities
    }

    pub fn pair_count(&self) -> PairCount {
        self.pairs
    }

    pub fn card_count(&self) -> usize {
        self.identities.len()
    }
}

impl TryFrom<Vec<CardIdentity>> for DeckConfig {
    type Error = GameError;

    fn try_from(identities: Vec<CardIdentity>) -> Result<Self> {
        Self::new(identities)
    }
}

impl From<DeckConfig> for Vec<CardIdentity> {
    fn from(deck: DeckConfig) -> Self {
        deck.identities
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Checks that `identities` forms a playable board and returns its pair count.
pub fn validate_identities(identities: &[CardIdentity]) -> Result<PairCount> {
    let len = identities.len();
    if len == 0 {
        return Err(ConfigError::Empty.into());
    }
    if len % 2 != 0 {
        return Err(ConfigError::OddCardCount(len).into());
    }
    if len > MAX_CARDS {
        return Err(ConfigError::TooManyCards(len).into());
    }

    let mut counts: HashMap<&CardIdentity, usize> = HashMap::with_capacity(len / 2);
    for identity in identities {
        *counts.entry(identity).or_default() += 1;
    }

    // report the first offender in board order so errors are stable
    for identity in identities {
        let count = counts[identity];
        if count != 2 {
            return Err(ConfigError::UnpairedIdentity {
                identity: identity.clone(),
                count,
            }
            .into());
        }
    }

    Ok(to_position(len / 2))
}
