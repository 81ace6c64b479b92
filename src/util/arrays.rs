/// A value or a list of further nested values.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Value(T),
    List(Vec<Nested<T>>),
}

/// Splices nested lists into their parent, `depth` levels deep. Lists below
/// that depth are kept as they are, and a depth of 0 returns a copy.
pub fn flatten<T: Clone>(items: &[Nested<T>], depth: usize) -> Vec<Nested<T>> {
    if depth == 0 {
        return items.to_vec();
    }

    items.iter().fold(Vec::with_capacity(items.len()), |mut flat, item| {
        match item {
            Nested::List(inner) => flat.extend(flatten(inner, depth - 1)),
            value => flat.push(value.clone()),
        }
        flat
    })
}

/// Appends each of `others` onto `target` in order, returning the new length.
pub fn in_place_concat<T, I>(target: &mut Vec<T>, others: I) -> usize
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    target.extend(others.into_iter().flatten());
    target.len()
}

/// A copy of `items` cut or padded with `fill` to exactly `size` entries.
pub fn array_ensure_size<T: Clone>(items: &[T], size: usize, fill: T) -> Vec<T> {
    let mut sized = items[..size.min(items.len())].to_vec();
    sized.resize(size, fill);
    sized
}
