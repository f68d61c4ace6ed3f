//! Splitting one flat sequence into the ordered batches the batch
//! decorators consume.

/// Splits `items` into groups of `size`, preserving order; the final
/// group holds the remainder. Five items chunked by 2 yield groups of
/// 2, 2 and 1.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunked<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "chunk size must be greater than zero");

    let mut groups = Vec::with_capacity(items.len().div_ceil(size));
    let mut rest = items.into_iter();
    loop {
        let group: Vec<T> = rest.by_ref().take(size).collect();
        if group.is_empty() {
            break;
        }
        groups.push(group);
    }
    groups
}
