use crate::bindings::{Circle, Label, Shape, ShapeKind};
use crate::helpers::mirror::SerdeShape;
use anyhow::Result;
use neatproto_types::json::{Deser, Ser, TokenReader};
use neatproto_types::union::{self, Discriminant};
use neatproto_types::{CodecError, VariantAccess};

/// Our union text is byte-identical to serde's `tag = "kind", content = "value"`,
/// and each side reads the other's output.
pub fn matches_serde_adjacent_tagging(shapes: Vec<Shape>) -> Result<()> {
    for shape in shapes {
        let mirror = SerdeShape::from(&shape);

        let ours = shape.ser_solo()?;
        let theirs = serde_json::to_string(&mirror)?;
        assert_eq!(ours, theirs);

        assert_eq!(Shape::deser_solo(&theirs)?, shape);
        assert_eq!(serde_json::from_str::<SerdeShape>(&ours)?, mirror);
    }
    Ok(())
}

pub fn ops_through_generated_union() -> Result<()> {
    for kind in ShapeKind::VARIANTS.iter().copied() {
        let res = union::construct_unit::<Shape>(kind);
        if kind.carries_payload() {
            assert!(
                matches!(
                    res,
                    Err(CodecError::InvalidVariantAccess {
                        access: VariantAccess::PayloadRequired,
                        ..
                    })
                ),
                "{kind:?}"
            );
        } else {
            assert_eq!(union::discriminate(&res?), kind);
        }
    }

    let circle: Shape = union::construct(Circle { radius: 2.0 });
    assert_eq!(union::discriminate(&circle), ShapeKind::Circle);
    assert!(matches!(
        union::unwrap::<Shape, Label>(circle.clone()),
        Err(CodecError::InvalidVariantAccess {
            kind: "circle",
            access: VariantAccess::KindMismatch { expected: "label" },
        })
    ));
    assert_eq!(union::unwrap::<Shape, Circle>(circle)?.radius, 2.0);

    assert!(matches!(
        union::unwrap::<Shape, Circle>(Shape::UnitSquare),
        Err(CodecError::InvalidVariantAccess {
            kind: "unitSquare",
            access: VariantAccess::UnitVariant,
        })
    ));
    assert!(union::construct_as::<Shape, Label>(ShapeKind::Circle, Label(String::new())).is_err());

    let mut r = TokenReader::new(r#"{"value":"x","kind":"label"}"#);
    assert_eq!(union::deser_kind::<ShapeKind>(&mut r)?, ShapeKind::Label);
    r.finish()?;
    Ok(())
}
