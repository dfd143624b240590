/// config holds the settings loaded from editdist.lua or a toml file
pub mod config;
/// cost is the validated substitution cost
pub mod cost;
/// unit decides which elements of a text are compared
pub mod unit;

pub use self::cost::Cost;
pub use self::unit::Unit;
