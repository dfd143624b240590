use std::{fmt::Display, str::FromStr};

use crate::error::Error;

/// Cost is the price of substituting one element by a mismatched one. Inserting and deleting an
/// element always costs 1, so any cost above 2 behaves like 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct Cost(usize);

impl Cost {
    /// new rejects negative costs, they would reward substitutions and break the minimum cost
    /// semantics of the distance
    pub fn new(cost: i64) -> Result<Self, Error> {
        if cost < 0 {
            return Err(Error::NegativeCost(cost));
        }
        Ok(Self(usize::try_from(cost).unwrap_or(usize::MAX)))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<i64> for Cost {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cost> for usize {
    fn from(value: Cost) -> Self {
        value.0
    }
}

impl FromStr for Cost {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cost = s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidCost(s.into()))?;
        Self::new(cost)
    }
}

impl mlua::FromLua for Cost {
    fn from_lua(value: mlua::Value, lua: &mlua::Lua) -> mlua::Result<Self> {
        let value: i64 = lua.unpack(value)?;
        Self::new(value).map_err(|err| mlua::Error::FromLuaConversionError {
            from: "integer",
            to: "editdist::cost::Cost".into(),
            message: Some(err.to_string()),
        })
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
