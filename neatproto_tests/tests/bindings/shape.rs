use neatproto_types::json::{Deser, Ser, TokenReader, TokenWriter};
use neatproto_types::union::{self, CaseOf, Discriminant, TaggedUnion, UnionCase};
use neatproto_types::{CodecError, Result, VariantAccess};
use std::io::Write;

/* union Shape { empty; unitSquare; circle: Circle; quad: Quad; label: Label; } */

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ShapeKind {
    Empty,
    UnitSquare,
    Circle,
    Quad,
    Label,
}
impl Discriminant for ShapeKind {
    const VARIANTS: &'static [Self] = &[
        Self::Empty,
        Self::UnitSquare,
        Self::Circle,
        Self::Quad,
        Self::Label,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::UnitSquare => "unitSquare",
            Self::Circle => "circle",
            Self::Quad => "quad",
            Self::Label => "label",
        }
    }
    fn carries_payload(self) -> bool {
        matches!(self, Self::Circle | Self::Quad | Self::Label)
    }
}

#[derive(PartialEq, Clone, Debug)]
pub enum Shape {
    Empty,
    UnitSquare,
    Circle(Circle),
    Quad(Quad),
    Label(Label),
}
impl TaggedUnion for Shape {
    type Kind = ShapeKind;

    fn kind(&self) -> ShapeKind {
        match self {
            Self::Empty => ShapeKind::Empty,
            Self::UnitSquare => ShapeKind::UnitSquare,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Quad(_) => ShapeKind::Quad,
            Self::Label(_) => ShapeKind::Label,
        }
    }
    fn unit(kind: ShapeKind) -> Result<Self> {
        match kind {
            ShapeKind::Empty => Ok(Self::Empty),
            ShapeKind::UnitSquare => Ok(Self::UnitSquare),
            kind => Err(CodecError::variant(
                kind.name(),
                VariantAccess::PayloadRequired,
            )),
        }
    }
    fn ser_value<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        match self {
            Self::Circle(v) => v.ser(w),
            Self::Quad(v) => v.ser(w),
            Self::Label(v) => v.ser(w),
            unit => Err(CodecError::variant(
                unit.kind().name(),
                VariantAccess::UnitVariant,
            )),
        }
    }
    fn deser_value(kind: ShapeKind, r: &mut TokenReader<'_>) -> Result<Self> {
        match kind {
            ShapeKind::Circle => r.read().map(Self::Circle),
            ShapeKind::Quad => r.read().map(Self::Quad),
            ShapeKind::Label => r.read().map(Self::Label),
            kind => Err(CodecError::variant(
                kind.name(),
                VariantAccess::UnexpectedPayload,
            )),
        }
    }
}
impl Ser for Shape {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        union::ser_union(self, w)
    }
}
impl Deser for Shape {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        union::deser_union(r)
    }
}

macro_rules! shape_case {
    ($case:ident) => {
        impl UnionCase for $case {
            type Kind = ShapeKind;
            const KIND: ShapeKind = ShapeKind::$case;
        }
        impl CaseOf<Shape> for $case {
            fn into_union(self) -> Shape {
                Shape::$case(self)
            }
            fn from_union(u: Shape) -> Option<Self> {
                match u {
                    Shape::$case(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}
shape_case!(Circle);
shape_case!(Quad);
shape_case!(Label);

/* struct Circle { radius: float64; } */

#[derive(PartialEq, Clone, Debug)]
pub struct Circle {
    pub radius: f64,
}
impl Ser for Circle {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        w.begin_object()?;
        w.field("radius", &self.radius)?;
        w.end_object()
    }
}
impl Deser for Circle {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        let mut radius = None;
        r.begin_object()?;
        while let Some(key) = r.next_key()? {
            match key.as_str() {
                "radius" => r.read_member("radius", &mut radius)?,
                _ => {
                    r.skip_value()?;
                }
            }
        }
        Ok(Self {
            radius: radius.ok_or(CodecError::MissingField("radius"))?,
        })
    }
}

/* struct Quad { corners: int32[4]; } */

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Quad {
    pub corners: [i32; 4],
}
impl Ser for Quad {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        w.begin_object()?;
        w.field("corners", &self.corners)?;
        w.end_object()
    }
}
impl Deser for Quad {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        let mut corners = None;
        r.begin_object()?;
        while let Some(key) = r.next_key()? {
            match key.as_str() {
                "corners" => r.read_member("corners", &mut corners)?,
                _ => {
                    r.skip_value()?;
                }
            }
        }
        Ok(Self {
            corners: corners.ok_or(CodecError::MissingField("corners"))?,
        })
    }
}

/* alias Label = string; */

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Label(pub String);
impl Ser for Label {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        w.write_str(&self.0)
    }
}
impl Deser for Label {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        r.read().map(Self)
    }
}
