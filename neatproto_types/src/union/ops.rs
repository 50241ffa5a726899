use crate::union::{CaseOf, Discriminant, TaggedUnion, UnionCase};
use crate::{CodecError, Result, VariantAccess};

/// Builds a payload variant. The discriminant comes from the case type, so it cannot disagree.
pub fn construct<U, V>(value: V) -> U
where
    U: TaggedUnion,
    V: CaseOf<U>,
{
    value.into_union()
}

/// Builds a payload variant from a discriminant obtained at runtime.
pub fn construct_as<U, V>(kind: U::Kind, value: V) -> Result<U>
where
    U: TaggedUnion,
    V: CaseOf<U>,
{
    let declared = <V as UnionCase>::KIND;
    if kind != declared {
        return Err(CodecError::variant(
            kind.name(),
            VariantAccess::KindMismatch {
                expected: declared.name(),
            },
        ));
    }
    Ok(value.into_union())
}

/// Builds a unit variant.
pub fn construct_unit<U: TaggedUnion>(kind: U::Kind) -> Result<U> {
    if kind.carries_payload() {
        return Err(CodecError::variant(
            kind.name(),
            VariantAccess::PayloadRequired,
        ));
    }
    U::unit(kind)
}

pub fn discriminate<U: TaggedUnion>(u: &U) -> U::Kind {
    u.kind()
}

/// Takes the payload out of `u`, which must hold the case `V`.
pub fn unwrap<U, V>(u: U) -> Result<V>
where
    U: TaggedUnion,
    V: CaseOf<U>,
{
    let kind = u.kind();
    if !kind.carries_payload() {
        return Err(CodecError::variant(kind.name(), VariantAccess::UnitVariant));
    }
    let declared = <V as UnionCase>::KIND;
    let mismatch = || {
        CodecError::variant(
            kind.name(),
            VariantAccess::KindMismatch {
                expected: declared.name(),
            },
        )
    };
    if kind != declared {
        return Err(mismatch());
    }
    V::from_union(u).ok_or_else(mismatch)
}
