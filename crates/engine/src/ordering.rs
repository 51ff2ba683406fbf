//! Positional reordering primitives.

/// Moves the element at `from` so that it ends up at `to`.
///
/// The element is removed and reinserted; everything between the two
/// positions shifts by one toward the vacated slot. A `to` past the end
/// appends. An out-of-range `from` leaves the sequence untouched.
///
/// # Examples
///
/// ```
/// use fast_kanban_engine::ordering::array_move;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// array_move(&mut items, 1, 3);
/// assert_eq!(items, ['a', 'c', 'd', 'b']);
///
/// array_move(&mut items, 3, 0);
/// assert_eq!(items, ['b', 'a', 'c', 'd']);
/// ```
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}
