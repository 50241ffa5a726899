use itertools::Itertools;
use std::fmt::Debug;
use std::hash::Hash;

/// The enumerated constant naming which variant of a union is present.
///
/// `VARIANTS` lists every discriminant once; names are pairwise distinct.
pub trait Discriminant: Copy + Eq + Hash + Debug + 'static {
    const VARIANTS: &'static [Self];

    /// The `kind` string on the wire.
    fn name(self) -> &'static str;

    fn carries_payload(self) -> bool;

    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|kind| kind.name() == name)
    }

    fn expected_names() -> String {
        Self::VARIANTS.iter().map(|kind| kind.name()).join(", ")
    }
}

/// A payload type bound to exactly one discriminant at compile time.
pub trait UnionCase {
    type Kind: Discriminant;
    const KIND: Self::Kind;
}
