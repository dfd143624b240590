use std::fs;

use crate::{
    error::Error,
    types::{Cost, Unit},
};

/// name of the global lua table holding the configuration
const LUA_TABLE: &str = "editdist";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// substitution cost, insertions and deletions always cost 1
    pub cost: Cost,
    pub unit: Unit,
    /// maximum amount of suggestions printed in suggest mode
    pub suggestions: usize,
    /// maximum distance of a suggestion, derived from the word if not set
    pub threshold: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cost: Cost::default(),
            unit: Unit::default(),
            suggestions: 3,
            threshold: None,
        }
    }
}

/// RawConfig is the unvalidated form of [Config], every field may be omitted
#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    cost: Option<i64>,
    unit: Option<Unit>,
    suggestions: Option<usize>,
    threshold: Option<usize>,
}

impl mlua::FromLua for RawConfig {
    fn from_lua(value: mlua::Value, _lua: &mlua::Lua) -> mlua::Result<Self> {
        let table = match value {
            mlua::Value::Table(table) => table,
            other => {
                return Err(mlua::Error::FromLuaConversionError {
                    from: other.type_name(),
                    to: "editdist::config::Config".into(),
                    message: Some(format!("{} has to be a table", LUA_TABLE)),
                });
            }
        };

        Ok(RawConfig {
            cost: table.get("cost")?,
            unit: table.get("unit")?,
            suggestions: table.get("suggestions")?,
            threshold: table.get("threshold")?,
        })
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let default = Config::default();
        Ok(Config {
            cost: match raw.cost {
                Some(cost) => Cost::new(cost)?,
                None => default.cost,
            },
            unit: raw.unit.unwrap_or(default.unit),
            suggestions: raw.suggestions.unwrap_or(default.suggestions),
            threshold: raw.threshold.or(default.threshold),
        })
    }
}

impl Config {
    /// load reads the configuration at file_name, files ending in `.toml` are parsed as toml,
    /// everything else is executed as lua
    pub fn load(file_name: &str) -> Result<Config, Error> {
        let source = fs::read_to_string(file_name).map_err(|err| Error::Config {
            file: file_name.into(),
            reason: format!(
                "Issue trying to read configuration: [{}], falling back to default configuration",
                err
            ),
        })?;

        if file_name.ends_with(".toml") {
            Self::from_toml(file_name, &source)
        } else {
            // the lua state is only needed while unpacking, nothing in the config refers to it
            let lua = mlua::Lua::new();
            Self::from_lua(&lua, file_name, &source)
        }
    }

    /// from_lua executes source and reads the global `editdist` table
    pub fn from_lua(lua: &mlua::Lua, file_name: &str, source: &str) -> Result<Config, Error> {
        let config_err = |reason: String| Error::Config {
            file: file_name.into(),
            reason,
        };

        lua.load(source)
            .set_name(file_name)
            .exec()
            .map_err(|err| config_err(err.to_string()))?;
        let raw_conf = lua
            .globals()
            .get::<mlua::Value>(LUA_TABLE)
            .map_err(|err| config_err(err.to_string()))?;
        if raw_conf.is_nil() {
            return Err(config_err(format!(
                "{} table is missing from configuration",
                LUA_TABLE
            )));
        }
        let raw: RawConfig = lua
            .unpack(raw_conf)
            .map_err(|err| config_err(err.to_string()))?;
        Config::try_from(raw).map_err(|err| config_err(err.to_string()))
    }

    /// from_toml reads the same keys as [Config::from_lua], but from the top level of a toml
    /// document
    pub fn from_toml(file_name: &str, source: &str) -> Result<Config, Error> {
        let config_err = |reason: String| Error::Config {
            file: file_name.into(),
            reason,
        };

        let raw: RawConfig = toml::from_str(source).map_err(|err| config_err(err.to_string()))?;
        Config::try_from(raw).map_err(|err| config_err(err.to_string()))
    }
}
