/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Fail-fast monoid over [`Result`].

use super::Monoid;
use super::Semigroup;

/// Monoid over `Result<R, L>`, right-biased and fail-fast.
///
/// `Ok` is the right branch and `Err` the left branch:
///
/// - `combine(Ok(x), Ok(y)) = Ok(right.combine(x, y))`
/// - if either operand is an `Err`, the result is the first `Err` in
///   argument order, unchanged
/// - `empty = Ok(right.empty())`
///
/// Bulk reductions stop at the first `Err` without looking at the
/// remaining elements.
///
/// Construct with [`either`].
///
/// # Example
/// ```
/// use monoids::Monoid;
/// use monoids::Semigroup;
/// use monoids::catalog;
///
/// type Checked = Result<i32, String>;
///
/// let m = monoids::either(catalog::string(), catalog::int());
/// let (a, b) = (Checked::Err("a".into()), Checked::Err("b".into()));
/// assert_eq!(m.combine(&Checked::Ok(1), &Checked::Ok(2)), Ok(3));
/// assert_eq!(m.combine(&a, &b), a);
/// assert_eq!(m.combine_all(vec![Ok(1), Err("boom".to_string()), Ok(2)]), Err("boom".to_string()));
/// assert_eq!(m.empty(), Checked::Ok(0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EitherMonoid<ML, MR> {
    left: ML,
    right: MR,
}

/// Build the fail-fast [`Result`] monoid from the instances of its two
/// branches.
pub fn either<ML, MR>(left: ML, right: MR) -> EitherMonoid<ML, MR> {
    EitherMonoid { left, right }
}

impl<ML, MR> EitherMonoid<ML, MR> {
    /// The instance for the `Err` branch.
    pub fn left(&self) -> &ML {
        &self.left
    }

    /// The instance for the `Ok` branch.
    pub fn right(&self) -> &MR {
        &self.right
    }
}

impl<L, R, ML, MR> Semigroup<Result<R, L>> for EitherMonoid<ML, MR>
where
    L: Clone,
    ML: Semigroup<L>,
    MR: Semigroup<R>,
{
    fn combine(&self, a: &Result<R, L>, b: &Result<R, L>) -> Result<R, L> {
        match (a, b) {
            (Ok(x), Ok(y)) => Ok(self.right.combine(x, y)),
            (Err(e), _) | (Ok(_), Err(e)) => Err(e.clone()),
        }
    }
}

impl<L, R, ML, MR> Monoid<Result<R, L>> for EitherMonoid<ML, MR>
where
    L: Clone,
    ML: Semigroup<L>,
    MR: Monoid<R>,
{
    fn empty(&self) -> Result<R, L> {
        Ok(self.right.empty())
    }

    fn combine_all_ordered(&self, xs: &[Result<R, L>]) -> Result<R, L>
    where
        Result<R, L>: Clone,
    {
        self.combine_iter(&mut xs.iter().cloned())
    }

    fn combine_iter(&self, xs: &mut dyn Iterator<Item = Result<R, L>>) -> Result<R, L> {
        let mut acc: Option<R> = None;
        for (seen, x) in xs.enumerate() {
            let x = match x {
                Ok(x) => x,
                Err(e) => {
                    tracing::trace!(seen, "combine_all stopped at first error");
                    return Err(e);
                }
            };
            acc = Some(match acc {
                None => x,
                Some(acc) => self.right.combine(&acc, &x),
            });
        }
        Ok(acc.unwrap_or_else(|| self.right.empty()))
    }
}
