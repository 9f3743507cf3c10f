/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Pointwise monoid over maps.
//!
//! [`MapMonoid<S>`] combines two maps by taking the union of their
//! keys; a key present on both sides gets the two values merged with
//! the value semigroup `S` (left value first). The identity is the
//! empty map.
//!
//! Both [`HashMap`] (with any `BuildHasher`) and [`BTreeMap`] are
//! supported. The key type needs no capability of its own.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use monoids::Semigroup;
//! use monoids::catalog;
//!
//! let m = monoids::map(catalog::int());
//! let a = BTreeMap::from([("x", 1), ("y", 2)]);
//! let b = BTreeMap::from([("y", 3), ("z", 4)]);
//! assert_eq!(m.combine(&a, &b), BTreeMap::from([("x", 1), ("y", 5), ("z", 4)]));
//! ```

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::hash::Hash;

use super::CommutativeMonoid;
use super::Monoid;
use super::Semigroup;

/// Pointwise map monoid: union of keys, colliding values combined
/// with `S`.
///
/// Construct with [`map`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapMonoid<S> {
    values: S,
}

/// Build the map monoid from a semigroup on the value type.
pub fn map<S>(values: S) -> MapMonoid<S> {
    MapMonoid { values }
}

impl<S> MapMonoid<S> {
    /// The semigroup used for colliding values.
    pub fn values(&self) -> &S {
        &self.values
    }
}

impl<K, V, H, S> Semigroup<HashMap<K, V, H>> for MapMonoid<S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    H: BuildHasher + Clone,
    S: Semigroup<V>,
{
    fn combine(&self, a: &HashMap<K, V, H>, b: &HashMap<K, V, H>) -> HashMap<K, V, H> {
        let mut out = a.clone();
        self.combine_assign(&mut out, b);
        out
    }

    fn combine_assign(&self, a: &mut HashMap<K, V, H>, b: &HashMap<K, V, H>) {
        for (k, v_other) in b {
            a.entry(k.clone())
                .and_modify(|v_here| self.values.combine_assign(v_here, v_other))
                .or_insert_with(|| v_other.clone());
        }
    }
}

impl<K, V, H, S> Monoid<HashMap<K, V, H>> for MapMonoid<S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    H: BuildHasher + Clone + Default,
    S: Semigroup<V>,
{
    fn empty(&self) -> HashMap<K, V, H> {
        HashMap::default()
    }
}

impl<K, V, H, S> CommutativeMonoid<HashMap<K, V, H>> for MapMonoid<S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    H: BuildHasher + Clone + Default,
    S: CommutativeMonoid<V>,
{
}

impl<K, V, S> Semigroup<BTreeMap<K, V>> for MapMonoid<S>
where
    K: Ord + Clone,
    V: Clone,
    S: Semigroup<V>,
{
    fn combine(&self, a: &BTreeMap<K, V>, b: &BTreeMap<K, V>) -> BTreeMap<K, V> {
        let mut out = a.clone();
        self.combine_assign(&mut out, b);
        out
    }

    fn combine_assign(&self, a: &mut BTreeMap<K, V>, b: &BTreeMap<K, V>) {
        for (k, v_other) in b {
            a.entry(k.clone())
                .and_modify(|v_here| self.values.combine_assign(v_here, v_other))
                .or_insert_with(|| v_other.clone());
        }
    }
}

impl<K, V, S> Monoid<BTreeMap<K, V>> for MapMonoid<S>
where
    K: Ord + Clone,
    V: Clone,
    S: Semigroup<V>,
{
    fn empty(&self) -> BTreeMap<K, V> {
        BTreeMap::new()
    }
}

impl<K, V, S> CommutativeMonoid<BTreeMap<K, V>> for MapMonoid<S>
where
    K: Ord + Clone,
    V: Clone,
    S: CommutativeMonoid<V>,
{
}
