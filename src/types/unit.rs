use crate::{lev, types::Cost};

/// Unit decides how a text is split into the elements the distance is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Raw utf8 bytes, a multibyte character counts once per byte
    Bytes,
    /// Unicode scalar values
    #[default]
    Chars,
    /// Whitespace separated words
    Words,
    /// Lines, with or without a trailing carriage return
    Lines,
}

impl mlua::FromLua for Unit {
    fn from_lua(value: mlua::Value, lua: &mlua::Lua) -> mlua::Result<Self> {
        let value: String = lua.unpack(value)?;

        Ok(match value.as_str() {
            "bytes" => Self::Bytes,
            "chars" => Self::Chars,
            "words" => Self::Words,
            "lines" => Self::Lines,
            _ => {
                return Err(mlua::Error::FromLuaConversionError {
                    from: "string",
                    to: "editdist::unit::Unit".into(),
                    message: Some("Unknown unit name".into()),
                });
            }
        })
    }
}

impl Unit {
    pub fn name(&self) -> &str {
        match self {
            Self::Bytes => "bytes",
            Self::Chars => "chars",
            Self::Words => "words",
            Self::Lines => "lines",
        }
    }

    /// distance splits a and b into elements of self and computes their edit distance
    pub fn distance(&self, a: &str, b: &str, cost: Cost) -> usize {
        let cost = cost.get();
        match self {
            Self::Bytes => lev::distance_with_cost(a.as_bytes(), b.as_bytes(), cost),
            Self::Chars => lev::distance_with_cost(
                &a.chars().collect::<Vec<_>>(),
                &b.chars().collect::<Vec<_>>(),
                cost,
            ),
            Self::Words => lev::distance_with_cost(
                &a.split_whitespace().collect::<Vec<_>>(),
                &b.split_whitespace().collect::<Vec<_>>(),
                cost,
            ),
            Self::Lines => lev::distance_with_cost(
                &a.lines().collect::<Vec<_>>(),
                &b.lines().collect::<Vec<_>>(),
                cost,
            ),
        }
    }
}
