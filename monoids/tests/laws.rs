/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property tests for the monoid laws over every provided instance.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::fmt::Debug;

use monoids::Const;
use monoids::Endo;
use monoids::LazySeq;
use monoids::Monoid;
use monoids::Semigroup;
use monoids::Validated;
use monoids::catalog;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Checks associativity, both identities, the bulk reductions and
/// `maybe_combine` for `m` at `(a, b, c)`, comparing values through
/// `view`.
fn check_laws<A, V, M>(
    m: &M,
    a: A,
    b: A,
    c: A,
    view: impl Fn(&A) -> V,
) -> Result<(), TestCaseError>
where
    A: Clone,
    V: PartialEq + Debug,
    M: Monoid<A>,
{
    let ab_c = m.combine(&m.combine(&a, &b), &c);
    let a_bc = m.combine(&a, &m.combine(&b, &c));
    prop_assert_eq!(view(&ab_c), view(&a_bc), "associativity");

    prop_assert_eq!(view(&m.combine(&m.empty(), &a)), view(&a), "left identity");
    prop_assert_eq!(view(&m.combine(&a, &m.empty())), view(&a), "right identity");

    prop_assert_eq!(view(&m.combine_all_ordered(&[])), view(&m.empty()), "empty reduction");
    prop_assert_eq!(
        view(&m.combine_all_ordered(std::slice::from_ref(&a))),
        view(&a),
        "singleton reduction"
    );
    let xs = [a.clone(), b.clone(), c.clone()];
    prop_assert_eq!(view(&m.combine_all_ordered(&xs)), view(&ab_c), "ordered reduction");
    prop_assert_eq!(view(&m.combine_all(xs.to_vec())), view(&ab_c), "collection reduction");

    prop_assert_eq!(view(&m.maybe_combine(a.clone(), None)), view(&a), "maybe_combine none");
    prop_assert_eq!(
        view(&m.maybe_combine(a.clone(), Some(&b))),
        view(&m.combine(&a, &b)),
        "maybe_combine some"
    );

    let mut acc = a.clone();
    m.combine_assign(&mut acc, &b);
    prop_assert_eq!(view(&acc), view(&m.combine(&a, &b)), "combine_assign");
    Ok(())
}

fn id<A: Clone>(a: &A) -> A {
    a.clone()
}

// Generators

fn gen_word() -> impl Strategy<Value = String> {
    "[a-z]{0,4}"
}

fn gen_checked() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        3 => any::<i32>().prop_map(Ok),
        1 => "[a-z]{1,3}".prop_map(Err),
    ]
}

fn gen_validated() -> impl Strategy<Value = Validated<Vec<String>, i64>> {
    prop_oneof![
        any::<i64>().prop_map(Validated::Valid),
        prop::collection::vec(gen_word(), 1..3).prop_map(Validated::Invalid),
    ]
}

fn gen_counts() -> impl Strategy<Value = BTreeMap<u8, u32>> {
    prop::collection::btree_map(0u8..8, any::<u32>(), 0..6)
}

/// An affine map `x -> k * x + d` over wrapping `i64`; composition of
/// these is observable and order sensitive.
fn gen_affine() -> impl Strategy<Value = (i64, i64)> {
    (-5i64..5, -100i64..100)
}

fn affine((k, d): (i64, i64)) -> Endo<i64> {
    Endo::new(move |x: i64| k.wrapping_mul(x).wrapping_add(d))
}

// Laws

proptest! {
    #[test]
    fn boolean_laws(a: bool, b: bool, c: bool) {
        check_laws(&catalog::boolean(), a, b, c, id)?;
    }

    #[test]
    fn integer_laws(a: i32, b: i32, c: i32, x: i8, y: i8, z: i8) {
        check_laws(&catalog::int(), a, b, c, id)?;
        check_laws(&catalog::byte(), x, y, z, id)?;
        check_laws(&monoids::monoid::<u64>(), a as u64, b as u64, c as u64, id)?;
    }

    #[test]
    fn float_laws(a in -1000i32..1000, b in -1000i32..1000, c in -1000i32..1000) {
        // Small integers are exact in f64, so addition is associative here.
        check_laws(&catalog::double(), a as f64, b as f64, c as f64, id)?;
        check_laws(&catalog::float(), a as f32, b as f32, c as f32, id)?;
    }

    #[test]
    fn string_laws(a in gen_word(), b in gen_word(), c in gen_word()) {
        check_laws(&catalog::string(), a, b, c, id)?;
    }

    #[test]
    fn list_laws(
        a in prop::collection::vec(any::<u8>(), 0..5),
        b in prop::collection::vec(any::<u8>(), 0..5),
        c in prop::collection::vec(any::<u8>(), 0..5),
    ) {
        check_laws(&catalog::list(), a, b, c, id)?;
    }

    #[test]
    fn sequence_laws(
        a in prop::collection::vec(any::<u8>(), 0..5),
        b in prop::collection::vec(any::<u8>(), 0..5),
        c in prop::collection::vec(any::<u8>(), 0..5),
    ) {
        let (la, lb, lc) = (
            LazySeq::from_vec(a.clone()),
            LazySeq::from_vec(b.clone()),
            LazySeq::from_vec(c),
        );
        check_laws(&catalog::sequence(), la.clone(), lb.clone(), lc, LazySeq::to_vec)?;
        let joined = catalog::sequence().combine(&la, &lb).to_vec();
        prop_assert_eq!(joined, [a, b].concat());
    }

    #[test]
    fn either_laws(a in gen_checked(), b in gen_checked(), c in gen_checked()) {
        let m = monoids::either(catalog::string(), catalog::int());
        check_laws(&m, a.clone(), b.clone(), c, id)?;
        match (&a, &b) {
            (Ok(x), Ok(y)) => prop_assert_eq!(m.combine(&a, &b), Ok(x.wrapping_add(*y))),
            (Err(e), _) | (Ok(_), Err(e)) => prop_assert_eq!(m.combine(&a, &b), Err(e.clone())),
        }
    }

    #[test]
    fn either_reduction_is_first_error(xs in prop::collection::vec(gen_checked(), 0..8)) {
        let m = monoids::either(catalog::string(), catalog::int());
        let expected = match xs.iter().find(|x| x.is_err()) {
            Some(first) => first.clone(),
            None => Ok(xs.iter().map(|x| *x.as_ref().unwrap()).fold(0i32, i32::wrapping_add)),
        };
        prop_assert_eq!(m.combine_all_ordered(&xs), expected.clone());
        let shared: monoids::SharedMonoid<Result<i32, String>> = std::sync::Arc::new(m);
        prop_assert_eq!(shared.combine_all_ordered(&xs), expected.clone());
        prop_assert_eq!(shared.combine_all(xs.clone()), expected.clone());
        prop_assert_eq!(m.combine_all(xs), expected);
    }

    #[test]
    fn option_laws(
        a in prop::option::of(gen_word()),
        b in prop::option::of(gen_word()),
        c in prop::option::of(gen_word()),
    ) {
        check_laws(&monoids::option(catalog::string()), a, b, c, id)?;
    }

    #[test]
    fn map_laws(a in gen_counts(), b in gen_counts(), c in gen_counts()) {
        check_laws(&monoids::map(monoids::monoid::<u32>()), a, b, c, id)?;
    }

    #[test]
    fn map_merges_pointwise(a in gen_counts(), b in gen_counts()) {
        let merged = monoids::map(catalog::monoid::<u32>()).combine(&a, &b);
        for (k, v) in &merged {
            let expected = match (a.get(k), b.get(k)) {
                (Some(x), Some(y)) => x.wrapping_add(*y),
                (Some(x), None) | (None, Some(x)) => *x,
                (None, None) => unreachable!("key {k} came from neither side"),
            };
            prop_assert_eq!(*v, expected);
        }
        let keys: BTreeSet<_> = a.keys().chain(b.keys()).collect();
        prop_assert_eq!(merged.len(), keys.len());
    }

    #[test]
    fn hash_map_laws(
        a in prop::collection::hash_map("[a-c]", gen_word(), 0..4),
        b in prop::collection::hash_map("[a-c]", gen_word(), 0..4),
        c in prop::collection::hash_map("[a-c]", gen_word(), 0..4),
    ) {
        let m = monoids::map(catalog::string());
        check_laws(&m, a, b, c, id)?;
    }

    #[test]
    fn validated_laws(a in gen_validated(), b in gen_validated(), c in gen_validated()) {
        let m = monoids::validated(catalog::list(), catalog::long());
        check_laws(&m, a, b, c, id)?;
    }

    #[test]
    fn validated_keeps_every_error(xs in prop::collection::vec(gen_validated(), 1..8)) {
        let m = monoids::validated(catalog::list(), catalog::long());
        let errors: Vec<String> = xs
            .iter()
            .filter_map(|x| match x {
                Validated::Invalid(es) => Some(es.clone()),
                Validated::Valid(_) => None,
            })
            .flatten()
            .collect();
        let reduced = m.combine_all_ordered(&xs);
        if errors.is_empty() {
            prop_assert!(reduced.is_valid());
        } else {
            prop_assert_eq!(reduced, Validated::Invalid(errors));
        }
    }

    #[test]
    fn endo_laws(f in gen_affine(), g in gen_affine(), h in gen_affine(), point in -1000i64..1000) {
        let m = monoids::endo::<i64>();
        let at = |e: &Endo<i64>| e.apply(point);
        check_laws(&m, affine(f), affine(g), affine(h), at)?;
        prop_assert_eq!(
            m.combine(&affine(f), &affine(g)).apply(point),
            affine(f).apply(affine(g).apply(point))
        );
    }

    #[test]
    fn const_laws(a: i16, b: i16, c: i16) {
        struct Tag;
        let m = monoids::constant(catalog::short());
        let wrap = Const::<i16, Tag>::new;
        check_laws(&m, wrap(a), wrap(b), wrap(c), |x| *x.value())?;
    }
}

// Scenarios

#[test]
fn integer_addition_scenario() {
    assert_eq!(catalog::int().combine_all_ordered(&[1, 2, 3, 4]), 10);
    assert_eq!(catalog::int().combine_all_ordered(&[]), 0);
}

#[test]
fn boolean_and_scenario() {
    assert!(!catalog::boolean().combine_all_ordered(&[true, true, false]));
    assert!(catalog::boolean().empty());
}

#[test]
fn sequence_concatenation_scenario() {
    assert_eq!(
        catalog::list().combine(&vec!["a", "b"], &vec!["c"]),
        vec!["a", "b", "c"]
    );
}

#[test]
fn mapping_scenario() {
    let m = monoids::map(catalog::int());
    let a = HashMap::from([("x", 1), ("y", 2)]);
    let b = HashMap::from([("y", 3), ("z", 4)]);
    assert_eq!(m.combine(&a, &b), HashMap::from([("x", 1), ("y", 5), ("z", 4)]));
}

#[test]
fn validation_scenario() {
    let m = monoids::validated(catalog::list(), catalog::int());
    let e1: Validated<Vec<&str>, i32> = Validated::Invalid(vec!["e1"]);
    let e2 = Validated::Invalid(vec!["e2"]);
    assert_eq!(m.combine(&e1, &e2), Validated::Invalid(vec!["e1", "e2"]));
    assert_eq!(
        m.combine(&Validated::Valid(2), &Validated::Valid(3)),
        Validated::<Vec<&str>, i32>::Valid(5)
    );
}
