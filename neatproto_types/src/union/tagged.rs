use crate::json::{Deser, Ser, TokenReader, TokenWriter};
use crate::union::{self, Discriminant, UnionCase};
use crate::{CodecError, Result, VariantAccess};
use derive_more::{Deref, From};
use std::io::Write;

/// A closed set of variants, each identified by a `Kind`.
///
/// Implementations are generated per schema union. The payload hooks are only called for
/// kinds whose [`Discriminant::carries_payload`] is true; [`Self::unit`] only for the rest.
pub trait TaggedUnion: Sized {
    type Kind: Discriminant;

    fn kind(&self) -> Self::Kind;

    /// Builds a unit variant.
    fn unit(kind: Self::Kind) -> Result<Self>;

    fn ser_value<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()>;

    fn deser_value(kind: Self::Kind, r: &mut TokenReader<'_>) -> Result<Self>;
}

/// A payload case of the union `U`.
pub trait CaseOf<U: TaggedUnion>: UnionCase<Kind = U::Kind> + Sized {
    fn into_union(self) -> U;

    /// `Some` iff `u` holds this case.
    fn from_union(u: U) -> Option<Self>;
}

/// The unit-discriminant form: a union whose variants carry no payload at this level.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Tagged<K> {
    kind: K,
}
impl<K: Discriminant> Tagged<K> {
    pub fn new(kind: K) -> Result<Self> {
        if kind.carries_payload() {
            return Err(CodecError::variant(
                kind.name(),
                VariantAccess::PayloadRequired,
            ));
        }
        Ok(Self { kind })
    }
    pub fn kind(&self) -> K {
        self.kind
    }
}
impl<K: Discriminant> TaggedUnion for Tagged<K> {
    type Kind = K;

    fn kind(&self) -> K {
        self.kind
    }
    fn unit(kind: K) -> Result<Self> {
        Self::new(kind)
    }
    fn ser_value<W: Write>(&self, _w: &mut TokenWriter<W>) -> Result<()> {
        Err(CodecError::variant(
            self.kind.name(),
            VariantAccess::UnitVariant,
        ))
    }
    fn deser_value(kind: K, _r: &mut TokenReader<'_>) -> Result<Self> {
        Err(CodecError::variant(
            kind.name(),
            VariantAccess::PayloadRequired,
        ))
    }
}
impl<K: Discriminant> Ser for Tagged<K> {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        union::ser_union(self, w)
    }
}
impl<K: Discriminant> Deser for Tagged<K> {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        union::deser_union(r)
    }
}

/// The payload-bearing form. The discriminant is always `V::KIND`.
#[derive(From, Deref, PartialEq, Eq, Hash, Clone, Debug)]
pub struct TaggedValue<V>(V);
impl<V: UnionCase> TaggedValue<V> {
    pub fn new(value: V) -> Self {
        Self(value)
    }
    pub fn kind(&self) -> V::Kind {
        V::KIND
    }
    pub fn into_value(self) -> V {
        self.0
    }
}
impl<V: UnionCase + Ser + Deser> TaggedUnion for TaggedValue<V> {
    type Kind = V::Kind;

    fn kind(&self) -> V::Kind {
        V::KIND
    }
    fn unit(kind: V::Kind) -> Result<Self> {
        Err(CodecError::variant(kind.name(), VariantAccess::PayloadRequired))
    }
    fn ser_value<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        self.0.ser(w)
    }
    fn deser_value(kind: V::Kind, r: &mut TokenReader<'_>) -> Result<Self> {
        if kind != V::KIND {
            return Err(CodecError::variant(
                kind.name(),
                VariantAccess::KindMismatch {
                    expected: V::KIND.name(),
                },
            ));
        }
        V::deser(r).map(Self)
    }
}
impl<V: UnionCase + Ser + Deser> Ser for TaggedValue<V> {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        union::ser_union(self, w)
    }
}
impl<V: UnionCase + Ser + Deser> Deser for TaggedValue<V> {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        union::deser_union(r)
    }
}
