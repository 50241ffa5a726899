use super::Shape;
use neatproto_types::json::{Deser, Ser, TokenReader, TokenWriter};
use neatproto_types::{CodecError, Result};
use std::io::Write;

/* struct Ledger { id: uint128; balance: int128; history: int64[]; shape: Shape; } */

#[derive(PartialEq, Clone, Debug)]
pub struct Ledger {
    pub id: u128,
    pub balance: i128,
    pub history: Vec<i64>,
    pub shape: Shape,
}

impl Ser for Ledger {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        w.begin_object()?;
        w.field("id", &self.id)?;
        w.field("balance", &self.balance)?;
        w.field("history", &self.history)?;
        w.field("shape", &self.shape)?;
        w.end_object()
    }
}

impl Deser for Ledger {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        let mut id = None;
        let mut balance = None;
        let mut history = None;
        let mut shape = None;

        r.begin_object()?;
        while let Some(key) = r.next_key()? {
            match key.as_str() {
                "id" => r.read_member("id", &mut id)?,
                "balance" => r.read_member("balance", &mut balance)?,
                "history" => r.read_member("history", &mut history)?,
                "shape" => r.read_member("shape", &mut shape)?,
                _ => {
                    r.skip_value()?;
                }
            }
        }

        Ok(Self {
            id: id.ok_or(CodecError::MissingField("id"))?,
            balance: balance.ok_or(CodecError::MissingField("balance"))?,
            history: history.ok_or(CodecError::MissingField("history"))?,
            shape: shape.ok_or(CodecError::MissingField("shape"))?,
        })
    }
}
