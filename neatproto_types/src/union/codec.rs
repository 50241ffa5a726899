use crate::json::{Deser, TokenReader, TokenWriter};
use crate::union::{Discriminant, TaggedUnion};
use crate::{CodecError, Result, VariantAccess};
use std::io::Write;

pub const KIND_FIELD: &str = "kind";
pub const VALUE_FIELD: &str = "value";

pub fn ser_union<U: TaggedUnion, W: Write>(u: &U, w: &mut TokenWriter<W>) -> Result<()> {
    let kind = u.kind();
    w.begin_object()?;
    w.key(KIND_FIELD)?;
    w.write_str(kind.name())?;
    if kind.carries_payload() {
        w.key(VALUE_FIELD)?;
        u.ser_value(w)?;
    }
    w.end_object()
}

/// Reads a union object. Members may come in any order; unknown members are skipped.
///
/// A unit variant tolerates `"value": null`, which is how some bindings spell an absent payload.
pub fn deser_union<U: TaggedUnion>(r: &mut TokenReader<'_>) -> Result<U> {
    let mut kind = None;
    let mut value_span = None;

    r.begin_object()?;
    while let Some(key) = r.next_key()? {
        match key.as_str() {
            KIND_FIELD => {
                if kind.is_some() {
                    return Err(CodecError::DuplicateField(KIND_FIELD.to_string()));
                }
                kind = Some(deser_kind_name::<U::Kind>(r)?);
            }
            VALUE_FIELD => {
                if value_span.is_some() {
                    return Err(CodecError::DuplicateField(VALUE_FIELD.to_string()));
                }
                value_span = Some(r.skip_value()?);
            }
            _ => {
                r.skip_value()?;
            }
        }
    }

    let kind = kind.ok_or(CodecError::MissingField(KIND_FIELD))?;
    if !kind.carries_payload() {
        if let Some(span) = value_span {
            if !r.sub_reader(span).take_null()? {
                return Err(CodecError::variant(
                    kind.name(),
                    VariantAccess::UnexpectedPayload,
                ));
            }
        }
        return U::unit(kind);
    }

    let span = value_span.ok_or(CodecError::MissingField(VALUE_FIELD))?;
    let mut value_r = r.sub_reader(span);
    let u = U::deser_value(kind, &mut value_r)?;
    value_r.finish()?;
    Ok(u)
}

/// Reads only the discriminant of a union object, skipping its payload.
pub fn deser_kind<K: Discriminant>(r: &mut TokenReader<'_>) -> Result<K> {
    let mut kind = None;

    r.begin_object()?;
    while let Some(key) = r.next_key()? {
        if key == KIND_FIELD {
            if kind.is_some() {
                return Err(CodecError::DuplicateField(key));
            }
            kind = Some(deser_kind_name::<K>(r)?);
        } else {
            r.skip_value()?;
        }
    }

    kind.ok_or(CodecError::MissingField(KIND_FIELD))
}

fn deser_kind_name<K: Discriminant>(r: &mut TokenReader<'_>) -> Result<K> {
    let name = String::deser(r)?;
    K::from_name(&name).ok_or_else(|| CodecError::UnknownKind {
        found: name,
        expected: K::expected_names(),
    })
}
