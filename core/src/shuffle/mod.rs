use alloc::vec::Vec;
use rand::Rng;

use crate::CardIdentity;
pub use random::*;

mod random;

/// Source of board orderings used when a game is dealt or reset.
pub trait DeckShuffler {
    fn shuffle(&mut self, identities: &mut [CardIdentity]);

    fn shuffled(&mut self, mut identities: Vec<CardIdentity>) -> Vec<CardIdentity> {
        self.shuffle(&mut identities);
        identities
    }
}

/// In-place Fisher-Yates shuffle, every permutation of `items` is equally likely.
///
/// The swap index is drawn from `0..=i`, letting an element stay where it is.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn empty_and_single_slices_are_untouched() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut rng);

        let mut one = [7u8];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, [7]);
    }

    #[test]
    fn output_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut items = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        fisher_yates(&mut items, &mut rng);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn two_items_keep_order_about_half_the_time() {
        // with an exclusive upper bound two items would always swap
        let mut rng = SmallRng::seed_from_u64(7);
        let runs = 4000;
        let mut kept = 0;
        for _ in 0..runs {
            let mut items = [0u8, 1];
            fisher_yates(&mut items, &mut rng);
            if items == [0, 1] {
                kept += 1;
            }
        }
        assert!((1700..=2300).contains(&kept), "kept order {kept} of {runs}");
    }

    #[test]
    fn every_position_is_reachable_for_each_item() {
        let mut rng = SmallRng::seed_from_u64(1234);
        let runs = 6000;
        let mut seen = [[0u32; 4]; 4];
        for _ in 0..runs {
            let mut items = [0usize, 1, 2, 3];
            fisher_yates(&mut items, &mut rng);
            for (pos, &item) in items.iter().enumerate() {
                seen[item][pos] += 1;
            }
        }
        // expected 1500 per cell
        for row in seen {
            for count in row {
                assert!((1300..=1700).contains(&count), "skewed count {count}");
            }
        }
    }
}
