use crate::bindings::{Ledger, Shape};
use crate::helpers::mirror::{QuotedSerdeLedger, SerdeLedger};
use anyhow::Result;
use neatproto_types::json::{CodecOptions, Deser, Ser, WideIntEncoding};
use neatproto_types::scalar::ScalarType;
use neatproto_types::CodecError;
use serde_json::Value;

pub fn raw_matches_serde(ledgers: &[Ledger]) -> Result<()> {
    for ledger in ledgers {
        let mirror = SerdeLedger::from(ledger);

        let ours = ledger.ser_solo()?;
        assert_eq!(ours, serde_json::to_string(&mirror)?);

        assert_eq!(&Ledger::deser_solo(&ours)?, ledger);
        assert_eq!(serde_json::from_str::<SerdeLedger>(&ours)?, mirror);
    }
    Ok(())
}

pub fn quoted_matches_serde(ledgers: &[Ledger]) -> Result<()> {
    let strict = CodecOptions::strict_interchange();
    for ledger in ledgers {
        let mirror = QuotedSerdeLedger::from(ledger);

        let ours = ledger.ser_solo_with(strict)?;
        assert_eq!(ours, serde_json::to_string(&mirror)?);

        assert_eq!(&Ledger::deser_solo_with(&ours, strict)?, ledger);
        assert_eq!(serde_json::from_str::<QuotedSerdeLedger>(&ours)?, mirror);

        // The default reader only takes the raw form.
        assert!(matches!(
            Ledger::deser_solo(&ours),
            Err(CodecError::MalformedNumber {
                ty: ScalarType::U128,
                ..
            })
        ));
    }
    Ok(())
}

/// What a consumer without arbitrary-precision numbers sees.
pub fn standard_parsers() -> Result<()> {
    let ledger = Ledger {
        id: u128::MAX,
        balance: i128::MIN,
        history: vec![],
        shape: Shape::Empty,
    };

    let raw = ledger.ser_solo()?;
    let value = serde_json::from_str::<Value>(&raw)?;
    assert!(value["id"].is_f64());
    assert_eq!(value["id"].as_u64(), None);

    let quoted = ledger.ser_solo_with(CodecOptions::strict_interchange())?;
    let value = serde_json::from_str::<Value>(&quoted)?;
    assert_eq!(value["id"], Value::String(u128::MAX.to_string()));
    assert_eq!(value["balance"], Value::String(i128::MIN.to_string()));

    let lenient = CodecOptions {
        wide_int: WideIntEncoding::Raw,
        lenient_wide_int: true,
    };
    assert_eq!(Ledger::deser_solo_with(&raw, lenient)?, ledger);
    assert_eq!(Ledger::deser_solo_with(&quoted, lenient)?, ledger);
    Ok(())
}
