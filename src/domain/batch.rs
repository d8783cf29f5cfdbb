use std::num::NonZeroUsize;

/// Per-call limit TextMagic documents for id and recipient lists.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => unreachable!(),
};

/// Split `items` into consecutive chunks of at most `max` elements.
///
/// Chunks keep the input order and concatenate back to `items`. An empty input
/// produces no chunks.
pub fn split<T>(items: &[T], max: NonZeroUsize) -> Vec<&[T]> {
    items.chunks(max.get()).collect()
}
