use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// How 128-bit integers appear in JSON text.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, Debug)]
#[serde(rename_all = "snake_case")]
pub enum WideIntEncoding {
    /// Unquoted base-10 digits. Needs an arbitrary-precision reader on the other end.
    #[default]
    Raw,
    /// Base-10 digits inside a JSON string. Valid for every standard JSON parser.
    Quoted,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    /// The form written for `uint128` and `int128`, and the only form read unless lenient.
    pub wide_int: WideIntEncoding,
    /// Read both 128-bit forms regardless of `wide_int`.
    pub lenient_wide_int: bool,
}

impl CodecOptions {
    /// Options for peers that only speak standard JSON.
    pub fn strict_interchange() -> Self {
        Self {
            wide_int: WideIntEncoding::Quoted,
            lenient_wide_int: false,
        }
    }

    pub fn accepts(&self, encoding: WideIntEncoding) -> bool {
        self.lenient_wide_int || self.wide_int == encoding
    }

    /// Loads options from a JSON document, naming the offending path on failure.
    pub fn from_json_str(src: &str) -> Result<Self> {
        let de = &mut serde_json::Deserializer::from_str(src);
        serde_path_to_error::deserialize(de).map_err(|err| {
            let path = err.path().to_string();
            anyhow!("at JSON path {path}: {}", err.into_inner())
        })
    }
}
