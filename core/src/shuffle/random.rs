use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Seeded shuffler, the same seed always deals the same sequence of boards.
#[derive(Clone, Debug)]
pub struct RandomShuffler {
    seed: u64,
    rng: SmallRng,
}

impl RandomShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DeckShuffler for RandomShuffler {
    fn shuffle(&mut self, identities: &mut [CardIdentity]) {
        fisher_yates(identities, &mut self.rng);
        log::debug!(
            "dealt {} cards from seed {:#018x}",
            identities.len(),
            self.seed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeckConfig;

    #[test]
    fn same_seed_deals_same_boards() {
        let deck = DeckConfig::classic();
        let mut a = RandomShuffler::new(99);
        let mut b = RandomShuffler::new(99);

        for _ in 0..3 {
            assert_eq!(
                a.shuffled(deck.identities().to_vec()),
                b.shuffled(deck.identities().to_vec())
            );
        }
    }

    #[test]
    fn consecutive_deals_differ() {
        let deck = DeckConfig::classic();
        let mut shuffler = RandomShuffler::new(5);
        let first = shuffler.shuffled(deck.identities().to_vec());
        let second = shuffler.shuffled(deck.identities().to_vec());
        let third = shuffler.shuffled(deck.identities().to_vec());
        assert!(first != second || second != third);
    }
}
