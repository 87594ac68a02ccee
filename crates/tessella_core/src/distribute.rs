//! Round-robin distribution of items into masonry columns.

use crate::error::LayoutError;

/// An entry a rendering layer hands to the distributor.
///
/// Items stay opaque: the distributor only asks whether an entry occupies a
/// column slot and how to reach nested children while normalizing wrapper
/// shapes.
pub trait ColumnItem: Sized {
    /// Whether this entry occupies a column slot. Non-renderable entries
    /// (whitespace text, comments) are carried along without advancing the
    /// assignment.
    fn is_renderable(&self) -> bool;

    /// Nested children, used to unwrap fragment shapes.
    fn children(&self) -> &[Self];
}

/// Ordered column buckets borrowing from the input collection.
pub type ColumnSet<'a, T> = Vec<Vec<&'a T>>;

/// Partition a collection into `columns` ordered buckets.
///
/// The collection is first normalized to a flat sequence: more than one
/// top-level entry means the collection itself is the sequence; a lone
/// entry is unwrapped to its children, and when `unwrap_single` is set a
/// lone remaining wrapper is unwrapped one further level. An empty flat
/// sequence short-circuits to an empty `ColumnSet` with zero buckets.
///
/// Entries are then walked in order and assigned round-robin. A
/// non-renderable entry is pushed into the column the next renderable entry
/// will occupy without advancing the assignment, so placeholders never
/// shift the column membership of the items around them; a leading
/// placeholder lands in column 0. Every bucket is present in the output,
/// trailing ones possibly empty.
pub fn distribute<'a, T: ColumnItem>(
    collection: &'a [T],
    columns: usize,
    unwrap_single: bool,
) -> Result<ColumnSet<'a, T>, LayoutError> {
    let items = flatten(collection, unwrap_single);
    if items.is_empty() {
        return Ok(Vec::new());
    }
    if columns == 0 {
        return Err(LayoutError::InvalidColumnCount(columns));
    }

    let mut buckets: ColumnSet<'a, T> = vec![Vec::new(); columns];
    let mut visible = 0usize;

    for item in items {
        buckets[visible % columns].push(item);
        if item.is_renderable() {
            visible += 1;
        }
    }

    Ok(buckets)
}

/// Normalize the raw collection into the flat item sequence.
fn flatten<T: ColumnItem>(collection: &[T], unwrap_single: bool) -> &[T] {
    match collection {
        [single] => match single.children() {
            [lone] if unwrap_single => lone.children(),
            children => children,
        },
        many => many,
    }
}
