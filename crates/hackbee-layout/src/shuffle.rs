//! Fisher–Yates shuffling.

use rand::Rng;

/// Return a uniformly shuffled copy of `items`.
///
/// Each call draws from the thread-local RNG; there is no seeding.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with_rng(items, &mut rand::thread_rng())
}

/// Return a copy of `items` shuffled with the given RNG.
pub fn shuffle_with_rng<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
