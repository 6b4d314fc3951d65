//! Accumulation strategies for the generic combinators.
//!
//! Every combinator that merges partial results (`Chain`, `ChainMany`,
//! `Greedy`) and every combinator that needs an empty result (`Optional`)
//! receives a [`Monoid`] explicitly, so each combinator is written once and
//! reused for token lists and for concatenated text alike.

use std::fmt;
use std::marker::PhantomData;

/// An identity value plus an associative merge.
///
/// Implementations must satisfy `combine(identity(), x) == x`,
/// `combine(x, identity()) == x` and associativity of `combine`.
pub trait Monoid {
    type Value;

    fn identity(&self) -> Self::Value;
    fn combine(&self, left: Self::Value, right: Self::Value) -> Self::Value;
}

/// Ordered list append.
pub struct VecMonoid<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> VecMonoid<T> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for VecMonoid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for VecMonoid<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VecMonoid<T> {}

impl<T> fmt::Debug for VecMonoid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VecMonoid")
    }
}

impl<T> Monoid for VecMonoid<T> {
    type Value = Vec<T>;

    fn identity(&self) -> Vec<T> {
        Vec::new()
    }

    fn combine(&self, mut left: Vec<T>, right: Vec<T>) -> Vec<T> {
        left.extend(right);
        left
    }
}

/// Text append.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMonoid;

impl Monoid for StringMonoid {
    type Value = String;

    fn identity(&self) -> String {
        String::new()
    }

    fn combine(&self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_monoid_laws() {
        let monoid = VecMonoid::new();
        let xs = vec![1, 2];
        assert_eq!(monoid.combine(monoid.identity(), xs.clone()), xs);
        assert_eq!(monoid.combine(xs.clone(), monoid.identity()), xs);

        let left = monoid.combine(monoid.combine(vec![1], vec![2]), vec![3]);
        let right = monoid.combine(vec![1], monoid.combine(vec![2], vec![3]));
        assert_eq!(left, right);
        assert_eq!(left, vec![1, 2, 3]);
    }

    #[test]
    fn test_string_monoid_laws() {
        let monoid = StringMonoid;
        assert_eq!(monoid.identity(), "");
        assert_eq!(monoid.combine("ab".into(), monoid.identity()), "ab");
        assert_eq!(monoid.combine(monoid.identity(), "ab".into()), "ab");
        assert_eq!(
            monoid.combine(monoid.combine("a".into(), "b".into()), "c".into()),
            monoid.combine("a".into(), monoid.combine("b".into(), "c".into()))
        );
    }
}
