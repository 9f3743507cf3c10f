/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Error-accumulating validation.
//!
//! Unlike the [`Result`] monoid built by [`crate::either`], which keeps
//! only the first error, [`ValidatedMonoid`] keeps combining errors so
//! that a reduction reports every failure it saw.
//!
//! ```rust
//! use monoids::Semigroup;
//! use monoids::Validated;
//! use monoids::catalog;
//!
//! let m = monoids::validated(catalog::list(), catalog::int());
//! let e1: Validated<Vec<&str>, i32> = Validated::Invalid(vec!["e1"]);
//! let e2 = Validated::Invalid(vec!["e2"]);
//! assert_eq!(m.combine(&e1, &e2), Validated::Invalid(vec!["e1", "e2"]));
//! assert_eq!(
//!     m.combine(&Validated::Valid(2), &Validated::Valid(3)),
//!     Validated::<Vec<&str>, i32>::Valid(5)
//! );
//! ```

use serde::Deserialize;
use serde::Serialize;

use super::Monoid;
use super::Semigroup;

/// The outcome of a validation: a valid value, or the errors found.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize
)]
pub enum Validated<E, A> {
    /// The value passed validation.
    Valid(A),
    /// Validation failed with these errors.
    Invalid(E),
}

impl<E, A> Validated<E, A> {
    /// Is this [`Validated::Valid`]?
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// Is this [`Validated::Invalid`]?
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Convert into a [`Result`], `Valid` becoming `Ok`.
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Validated::Valid(a) => Ok(a),
            Validated::Invalid(e) => Err(e),
        }
    }
}

impl<E, A> From<Result<A, E>> for Validated<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(a) => Validated::Valid(a),
            Err(e) => Validated::Invalid(e),
        }
    }
}

/// Accumulating monoid over [`Validated<E, A>`].
///
/// - `Valid(x) + Valid(y) = Valid(valid.combine(x, y))`
/// - `Invalid(e1) + Invalid(e2) = Invalid(invalid.combine(e1, e2))`
/// - a `Valid` and an `Invalid` combine to the `Invalid` operand,
///   unchanged
/// - `empty = Valid(valid.empty())`
///
/// Construct with [`validated`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidatedMonoid<SE, MA> {
    invalid: SE,
    valid: MA,
}

/// Build the accumulating validation monoid from a semigroup on errors
/// and a monoid on valid values.
pub fn validated<SE, MA>(invalid: SE, valid: MA) -> ValidatedMonoid<SE, MA> {
    ValidatedMonoid { invalid, valid }
}

impl<E, A, SE, MA> Semigroup<Validated<E, A>> for ValidatedMonoid<SE, MA>
where
    E: Clone,
    SE: Semigroup<E>,
    MA: Semigroup<A>,
{
    fn combine(&self, a: &Validated<E, A>, b: &Validated<E, A>) -> Validated<E, A> {
        match (a, b) {
            (Validated::Valid(x), Validated::Valid(y)) => {
                Validated::Valid(self.valid.combine(x, y))
            }
            (Validated::Invalid(e1), Validated::Invalid(e2)) => {
                Validated::Invalid(self.invalid.combine(e1, e2))
            }
            (Validated::Invalid(e), Validated::Valid(_))
            | (Validated::Valid(_), Validated::Invalid(e)) => Validated::Invalid(e.clone()),
        }
    }
}

impl<E, A, SE, MA> Monoid<Validated<E, A>> for ValidatedMonoid<SE, MA>
where
    E: Clone,
    SE: Semigroup<E>,
    MA: Monoid<A>,
{
    fn empty(&self) -> Validated<E, A> {
        Validated::Valid(self.valid.empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Append;
    use crate::primitives::Sum;

    type V = Validated<Vec<&'static str>, i32>;
    type M = ValidatedMonoid<Append<&'static str>, Sum<i32>>;

    fn m() -> M {
        validated(Append::new(), Sum::new())
    }

    fn valid(x: i32) -> V {
        Validated::Valid(x)
    }

    fn invalid(es: &[&'static str]) -> V {
        Validated::Invalid(es.to_vec())
    }

    #[test]
    fn valid_values_combine() {
        assert_eq!(m().combine(&valid(2), &valid(3)), valid(5));
    }

    #[test]
    fn errors_accumulate() {
        assert_eq!(
            m().combine(&invalid(&["e1"]), &invalid(&["e2"])),
            invalid(&["e1", "e2"])
        );
    }

    #[test]
    fn invalid_dominates_valid() {
        assert_eq!(m().combine(&valid(1), &invalid(&["e"])), invalid(&["e"]));
        assert_eq!(m().combine(&invalid(&["e"]), &valid(1)), invalid(&["e"]));
    }

    #[test]
    fn empty_is_valid_identity() {
        assert_eq!(m().empty(), valid(0));
        assert_eq!(m().combine(&m().empty(), &invalid(&["e"])), invalid(&["e"]));
    }

    #[test]
    fn combine_all_collects_every_error() {
        let xs = vec![
            valid(1),
            invalid(&["a"]),
            valid(2),
            invalid(&["b", "c"]),
        ];
        assert_eq!(m().combine_all(xs), invalid(&["a", "b", "c"]));
        assert_eq!(m().combine_all_ordered(&[valid(1), valid(2)]), valid(3));
    }

    #[test]
    fn result_conversions() {
        let ok: V = Ok(4).into();
        let err: V = Err(vec!["bad"]).into();
        assert!(ok.is_valid());
        assert!(err.is_invalid());
        assert_eq!(ok.into_result(), Ok(4));
        assert_eq!(err.into_result(), Err(vec!["bad"]));
    }

    #[test]
    fn validated_serde_roundtrip() {
        for original in [valid(7), invalid(&["x", "y"])] {
            let encoded = bincode::serialize(&original).unwrap();
            let decoded: Validated<Vec<String>, i32> = bincode::deserialize(&encoded).unwrap();
            assert_eq!(decoded.is_valid(), original.is_valid());
            let reencoded = bincode::serialize(&decoded).unwrap();
            assert_eq!(encoded, reencoded);
        }
    }
}
