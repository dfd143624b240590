use std::fmt::Display;

use crate::builder;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A substitution cost below zero was supplied, this breaks the minimum cost semantics
    NegativeCost(i64),
    /// A substitution cost that is not an integer
    InvalidCost(String),
    /// Wrong number of inputs for the selected mode
    Arity { expected: &'static str, got: usize },
    /// An input file could not be read
    Read { path: String, reason: String },
    /// The configuration could not be loaded
    Config { file: String, reason: String },
}

#[derive(Debug)]
pub enum Color {
    Reset,
    Red,
    Blue,
    Cyan,
    Green,
    Yellow,
}

impl Color {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reset => "\x1b[0m",
            Self::Red => "\x1b[31m",
            Self::Blue => "\x1b[94m",
            Self::Green => "\x1b[92m",
            Self::Yellow => "\x1b[93m",
            Self::Cyan => "\x1b[96m",
        }
    }
}

pub fn warn(b: &mut builder::Builder, s: &str) {
    print_str_colored(b, "warn", Color::Yellow);
    b.write_str(": ");
    b.write_str(s);
    b.write_char('\n');
}

pub fn err(b: &mut builder::Builder, s: &str) {
    print_str_colored(b, "error", Color::Red);
    b.write_str(": ");
    b.write_str(s);
    b.write_char('\n');
}

pub fn print_str_colored(b: &mut builder::Builder, s: &str, c: Color) {
    b.write_str(c.as_str());
    b.write_str(s);
    b.write_str(Color::Reset.as_str());
}

impl Error {
    pub fn name(&self) -> &str {
        match self {
            Self::NegativeCost(_) => "NegativeCost",
            Self::InvalidCost(_) => "InvalidCost",
            Self::Arity { .. } => "Arity",
            Self::Read { .. } => "Read",
            Self::Config { .. } => "Config",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::NegativeCost(_) => "The substitution cost must not be negative",
            Self::InvalidCost(_) => "The substitution cost must be an integer",
            Self::Arity { .. } => "The selected mode got the wrong number of inputs",
            Self::Read { .. } => "An input file could not be read",
            Self::Config { .. } => "The configuration could not be loaded",
        }
    }

    /// print writes the error in the form `error[Name]: message`, followed by the description of
    /// its kind
    pub fn print(&self, b: &mut builder::Builder) {
        print_str_colored(b, "error", Color::Red);
        b.write_char('[');
        print_str_colored(b, self.name(), Color::Red);
        b.write_str("]: ");
        b.write_string(self.to_string());
        b.write_char('\n');
        print_str_colored(b, "  * ", Color::Blue);
        print_str_colored(b, self.name(), Color::Blue);
        b.write_str(": ");
        b.write_str(self.description());
        b.write_char('\n');
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeCost(cost) => write!(f, "invalid substitution cost {}, must be >= 0", cost),
            Self::InvalidCost(raw) => write!(f, "invalid substitution cost '{}'", raw),
            Self::Arity { expected, got } => {
                write!(f, "expected {} input(s), got {}", expected, got)
            }
            Self::Read { path, reason } => write!(f, "failed to read file '{}': {}", path, reason),
            Self::Config { file, reason } => write!(f, "{}: {}", file, reason),
        }
    }
}

impl std::error::Error for Error {}
