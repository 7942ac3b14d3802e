use rand::Rng;
use rand::seq::SliceRandom;

/// In-place Fisher-Yates shuffle; every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Up to `count` items drawn uniformly without replacement.
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    shuffle(&mut items, rng);
    items.truncate(count);
    items
}
