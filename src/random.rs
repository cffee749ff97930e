use rand::seq::SliceRandom;

/// Uniform random element of `items`, or `None` for an empty slice.
/// An empty result means "nothing to render", never an error.
pub fn random_item<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}
