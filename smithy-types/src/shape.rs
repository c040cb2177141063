/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structural hashing for model members.
//!
//! Model shapes derive `PartialEq` but some member types (floats, maps) have no `Hash`
//! impl. [`ShapeHash`] fills that gap so every generated shape can implement `Hash`
//! consistently with its equality: equal shapes always hash equally.

use crate::Instant;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Storage for each member kind accepted by [`structure!`](crate::structure).
///
/// Every member is stored as `Option<kind::Kind<T>>`.
pub mod kind {
    use std::collections::HashMap;

    /// A string member.
    pub type Str<T> = T;
    /// A string member whose value never appears in `Debug` output.
    pub type Secret<T> = T;
    /// A `Copy` member such as a number or boolean, returned by value.
    pub type Prim<T> = T;
    /// A nested shape, enum or timestamp, returned by reference.
    pub type Member<T> = T;
    /// A list member. The builder's plain method appends one item.
    pub type List<T> = Vec<T>;
    /// A string-keyed map member. The builder's plain method inserts one entry.
    pub type Map<T> = HashMap<String, T>;
}

/// Hashing that agrees with `PartialEq` for every member type a shape can hold.
pub trait ShapeHash {
    /// Feeds this value into `state`.
    fn shape_hash<H: Hasher>(&self, state: &mut H);
}

macro_rules! hash_via_std {
    ($($ty:ty),*) => {
        $(
            impl ShapeHash for $ty {
                fn shape_hash<H: Hasher>(&self, state: &mut H) {
                    self.hash(state)
                }
            }
        )*
    };
}

hash_via_std!(String, bool, i32, i64, Instant);

impl ShapeHash for f64 {
    fn shape_hash<H: Hasher>(&self, state: &mut H) {
        // `0.0 == -0.0`, and `PartialEq` never matches NaN, so any stable bits will do there
        let normalized = if *self == 0.0 {
            0.0
        } else if self.is_nan() {
            f64::NAN
        } else {
            *self
        };
        normalized.to_bits().hash(state)
    }
}

impl<T: ShapeHash> ShapeHash for Option<T> {
    fn shape_hash<H: Hasher>(&self, state: &mut H) {
        match self {
            None => state.write_u8(0),
            Some(value) => {
                state.write_u8(1);
                value.shape_hash(state)
            }
        }
    }
}

impl<T: ShapeHash> ShapeHash for Vec<T> {
    fn shape_hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.shape_hash(state);
        }
    }
}

/// Entries are hashed in key order so that iteration order never leaks into the hash.
impl<T: ShapeHash> ShapeHash for HashMap<String, T> {
    fn shape_hash<H: Hasher>(&self, state: &mut H) {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        state.write_usize(entries.len());
        for (key, value) in entries {
            key.hash(state);
            value.shape_hash(state);
        }
    }
}

#[cfg(test)]
mod test {
    use super::ShapeHash;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;
    use std::hash::Hasher;

    fn hash_of<T: ShapeHash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.shape_hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn signed_zero_hashes_equally() {
        assert_eq!(hash_of(&0.0_f64), hash_of(&-0.0_f64));
    }

    #[test]
    fn map_hash_ignores_insertion_order() {
        let forward: HashMap<String, f64> = (0..32).map(|i| (i.to_string(), i as f64)).collect();
        let backward: HashMap<String, f64> =
            (0..32).rev().map(|i| (i.to_string(), i as f64)).collect();
        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn unset_and_empty_differ() {
        let unset: Option<Vec<String>> = None;
        assert_ne!(hash_of(&unset), hash_of(&Some(Vec::<String>::new())));
    }
}
