use crate::falsy::{Falsy, Nots};

/// Just returns its input.
pub fn identity<T>(v: T) -> T {
    v
}

/// What [`map`] and [`map_nots`] do besides mapping.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct MapOptions {
    /// Yield `None` instead of the unmapped value when the value is a "not".
    pub null_on_not: bool,

    /// Treat a missing mapping function like a "not" value, too. Without
    /// this, a missing function means [`identity`].
    pub func: bool,
}

impl MapOptions {
    pub fn null_on_not(mut self) -> Self {
        self.null_on_not = true;
        self
    }

    pub fn func(mut self) -> Self {
        self.func = true;
        self
    }
}

/// Map `v` through `f`, unless `v` is one of `nots` (compared with `==`).
///
/// A "not" value comes back unmapped, or as `None` with
/// [`MapOptions::null_on_not`].
///
/// ```
/// use fnkit::util::{map_nots, MapOptions};
///
/// let double = Some(|v: i32| v * 2);
/// assert_eq!(map_nots(4, double, MapOptions::default(), &[0, -1]), Some(8));
/// assert_eq!(map_nots(-1, double, MapOptions::default(), &[0, -1]), Some(-1));
/// assert_eq!(map_nots(-1, double, MapOptions::default().null_on_not(), &[0, -1]), None);
/// ```
pub fn map_nots<T, F>(v: T, f: Option<F>, opts: MapOptions, nots: &[T]) -> Option<T>
where
    T: PartialEq,
    F: FnOnce(T) -> T,
{
    map_if(v, f, opts, |v| nots.contains(v))
}

/// Like [`map_nots`], with the "not" values selected by category.
pub fn map<T, F>(v: T, f: Option<F>, opts: MapOptions, nots: Nots) -> Option<T>
where
    T: Falsy,
    F: FnOnce(T) -> T,
{
    map_if(v, f, opts, |v| v.is_not(nots))
}

fn map_if<T, F, N>(v: T, f: Option<F>, opts: MapOptions, is_not: N) -> Option<T>
where
    F: FnOnce(T) -> T,
    N: FnOnce(&T) -> bool,
{
    if is_not(&v) || (opts.func && f.is_none()) {
        return match opts.null_on_not {
            true => None,
            false => Some(v),
        };
    }
    Some(match f {
        Some(f) => f(v),
        None => v,
    })
}

/// `None` if `test` is one of `nots`, otherwise `v(test)`.
///
/// For a plain value, pass `|_| value`. Mapping the result further is just
/// `Option::map`.
pub fn when_nots<T, V, F>(test: T, v: F, nots: &[T]) -> Option<V>
where
    T: PartialEq,
    F: FnOnce(T) -> V,
{
    match nots.contains(&test) {
        true => None,
        false => Some(v(test)),
    }
}

/// `None` if `test` falls into one of the `nots` categories, otherwise
/// `v(test)`. Pass [`Nots::WHEN`] for the usual null-or-false test.
///
/// ```
/// use fnkit::falsy::{Not, Nots};
/// use fnkit::util::when;
///
/// let name = String::from("");
/// assert_eq!(when(&name, |n| n.len(), Nots::WHEN), Some(0));
/// assert_eq!(when(&name, |n| n.len(), Nots::WHEN.with(Not::Empty)), None);
/// ```
pub fn when<T, V, F>(test: T, v: F, nots: Nots) -> Option<V>
where
    T: Falsy,
    F: FnOnce(T) -> V,
{
    match test.is_not(nots) {
        true => None,
        false => Some(v(test)),
    }
}

/// A node followed by its ancestors, yielded from the top-most one down.
///
/// Iterating it backwards goes from the node up instead.
pub struct TreePath<T> {
    nodes: std::iter::Rev<std::vec::IntoIter<T>>,
}

impl<T> Iterator for TreePath<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.nodes.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> DoubleEndedIterator for TreePath<T> {
    fn next_back(&mut self) -> Option<T> {
        self.nodes.next_back()
    }
}

impl<T> ExactSizeIterator for TreePath<T> {}

/// The path from the root of a tree down to `element`.
pub fn tree_path<T, P>(element: Option<T>, get_parent: P) -> TreePath<T>
where
    P: FnMut(&T) -> Option<T>,
{
    tree_path_while(element, get_parent, |_| true)
}

/// Like [`tree_path`], but stops climbing at the first node for which
/// `keep` is false. That node and everything above it are left out.
pub fn tree_path_while<T, P, W>(element: Option<T>, mut get_parent: P, mut keep: W) -> TreePath<T>
where
    P: FnMut(&T) -> Option<T>,
    W: FnMut(&T) -> bool,
{
    let mut nodes = vec![];
    let mut next = element;
    while let Some(node) = next {
        if !keep(&node) {
            break;
        }
        next = get_parent(&node);
        nodes.push(node);
    }
    TreePath {
        nodes: nodes.into_iter().rev(),
    }
}

/// A constructor as a plain function, for passing around.
///
/// ```
/// let make = fnkit::util::new::<&str, String>();
/// assert_eq!(vec!["a", "b"].into_iter().map(make).collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub fn new<A, T: From<A>>() -> fn(A) -> T {
    T::from
}
