/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Looking up primitive instances.
//!
//! There are three ways to get hold of a primitive instance:
//!
//! - by name: [`boolean`], [`byte`], [`short`], [`int`], [`long`],
//!   [`float`], [`double`], [`string`], [`list`], [`sequence`];
//! - by type, statically: [`monoid::<A>()`](monoid) for any
//!   `A: HasMonoid`. Asking for an unsupported type does not compile;
//! - by type, dynamically: a [`Catalog`] maps types to shared
//!   instances and reports [`CatalogError::Unsupported`] when asked
//!   for a type nobody registered.
//!
//! ```rust
//! use monoids::Catalog;
//! use monoids::Monoid;
//! use monoids::catalog;
//!
//! assert_eq!(catalog::int().combine_all_ordered(&[1, 2, 3, 4]), 10);
//! assert_eq!(monoids::monoid::<bool>().empty(), true);
//!
//! let catalog = Catalog::with_primitives();
//! let sum = catalog.get::<i64>().unwrap();
//! assert_eq!(sum.combine_all_ordered(&[20, 22]), 42);
//! assert!(catalog.get::<std::time::Duration>().is_err());
//! ```

use std::any::Any;
use std::any::TypeId;
use std::any::type_name;
use std::sync::Arc;

use dashmap::DashMap;

use super::LazySeq;
use super::Monoid;
use super::primitives::All;
use super::primitives::Append;
use super::primitives::Concat;
use super::primitives::FloatSum;
use super::primitives::LazyConcat;
use super::primitives::Sum;

/// A type-erased, shareable monoid instance for `A`.
pub type SharedMonoid<A> = Arc<dyn Monoid<A> + Send + Sync>;

// Named factories

/// `bool` under `&&`, identity `true`.
pub const fn boolean() -> All {
    All
}

/// `i8` under wrapping addition.
pub const fn byte() -> Sum<i8> {
    Sum::new()
}

/// `i16` under wrapping addition.
pub const fn short() -> Sum<i16> {
    Sum::new()
}

/// `i32` under wrapping addition.
pub const fn int() -> Sum<i32> {
    Sum::new()
}

/// `i64` under wrapping addition.
pub const fn long() -> Sum<i64> {
    Sum::new()
}

/// `f32` under IEEE addition.
pub const fn float() -> FloatSum<f32> {
    FloatSum::new()
}

/// `f64` under IEEE addition.
pub const fn double() -> FloatSum<f64> {
    FloatSum::new()
}

/// [`String`] under concatenation.
pub const fn string() -> Concat {
    Concat
}

/// [`Vec<T>`] under concatenation.
pub const fn list<T>() -> Append<T> {
    Append::new()
}

/// [`LazySeq<T>`] under lazy concatenation.
pub const fn sequence<T>() -> LazyConcat<T> {
    LazyConcat::new()
}

// Lookup by type

/// Types with a canonical primitive monoid.
///
/// ```rust
/// use monoids::HasMonoid;
/// use monoids::Monoid;
///
/// fn total<A: HasMonoid + Clone>(xs: &[A]) -> A {
///     A::monoid().combine_all_ordered(xs)
/// }
///
/// assert_eq!(total(&[1u8, 2, 3]), 6);
/// assert_eq!(total(&["a".to_string(), "b".to_string()]), "ab");
/// assert_eq!(total::<f64>(&[]), 0.0);
/// ```
pub trait HasMonoid: Sized {
    /// The instance type.
    type Instance: Monoid<Self> + Copy + Default + Send + Sync + 'static;

    /// The canonical instance.
    fn monoid() -> Self::Instance {
        Default::default()
    }
}

/// The canonical primitive instance for `A`.
pub fn monoid<A: HasMonoid>() -> A::Instance {
    A::monoid()
}

impl HasMonoid for bool {
    type Instance = All;
}

macro_rules! has_monoid {
    ($instance:ident: $($ty:ty),* $(,)?) => {
        $(
            impl HasMonoid for $ty {
                type Instance = $instance<$ty>;
            }
        )*
    };
}

has_monoid!(Sum: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
has_monoid!(FloatSum: f32, f64);

impl HasMonoid for String {
    type Instance = Concat;
}

impl<T: Clone + 'static> HasMonoid for Vec<T> {
    type Instance = Append<T>;
}

impl<T: 'static> HasMonoid for LazySeq<T> {
    type Instance = LazyConcat<T>;
}

// Dynamic lookup

/// Errors raised when acquiring an instance from a [`Catalog`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No instance is registered for the requested type.
    #[error("no monoid instance registered for {type_name}")]
    Unsupported {
        /// The requested type.
        type_name: &'static str,
    },
}

/// A registry of monoid instances keyed by value type.
///
/// The catalog stores one [`SharedMonoid<A>`] per type `A`. It can be
/// shared between threads; registration and lookup both take `&self`.
#[derive(Default)]
pub struct Catalog {
    instances: DashMap<TypeId, Box<dyn Any + Send + Sync + 'static>>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the canonical instance of every primitive
    /// type: `bool`, the integer and floating point types, and
    /// [`String`].
    pub fn with_primitives() -> Self {
        let catalog = Self::new();
        catalog.register_canonical::<bool>();
        catalog.register_canonical::<i8>();
        catalog.register_canonical::<i16>();
        catalog.register_canonical::<i32>();
        catalog.register_canonical::<i64>();
        catalog.register_canonical::<i128>();
        catalog.register_canonical::<isize>();
        catalog.register_canonical::<u8>();
        catalog.register_canonical::<u16>();
        catalog.register_canonical::<u32>();
        catalog.register_canonical::<u64>();
        catalog.register_canonical::<u128>();
        catalog.register_canonical::<usize>();
        catalog.register_canonical::<f32>();
        catalog.register_canonical::<f64>();
        catalog.register_canonical::<String>();
        catalog
    }

    /// Register `instance` as the monoid for `A`, replacing any
    /// previous registration. Returns whether an instance was
    /// replaced.
    pub fn register<A, M>(&self, instance: M) -> bool
    where
        A: 'static,
        M: Monoid<A> + Send + Sync + 'static,
    {
        let shared: SharedMonoid<A> = Arc::new(instance);
        let replaced = self
            .instances
            .insert(TypeId::of::<A>(), Box::new(shared))
            .is_some();
        tracing::debug!(
            value_type = type_name::<A>(),
            instance = type_name::<M>(),
            replaced,
            "registered monoid instance"
        );
        replaced
    }

    /// Register the canonical instance of `A`.
    pub fn register_canonical<A: HasMonoid + 'static>(&self) -> bool {
        self.register::<A, _>(A::monoid())
    }

    /// The instance registered for `A`.
    pub fn get<A: 'static>(&self) -> Result<SharedMonoid<A>, CatalogError> {
        let found = self
            .instances
            .get(&TypeId::of::<A>())
            .and_then(|entry| entry.value().downcast_ref::<SharedMonoid<A>>().cloned());
        match found {
            Some(instance) => Ok(instance),
            None => {
                tracing::debug!(value_type = type_name::<A>(), "no monoid instance registered");
                Err(CatalogError::Unsupported {
                    type_name: type_name::<A>(),
                })
            }
        }
    }

    /// Whether an instance is registered for `A`.
    pub fn contains<A: 'static>(&self) -> bool {
        self.instances.contains_key(&TypeId::of::<A>())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Is the catalog empty?
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("len", &self.instances.len())
            .finish()
    }
}
