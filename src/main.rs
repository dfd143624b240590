use std::{fs, process::exit};

use clap::Parser;
use editdist::{
    builder,
    error::{self, Error, print_str_colored},
    suggest::{Suggestion, default_threshold, suggest},
    types::{Cost, Unit, config::Config},
};

/// configuration looked up in the working directory if --config is not given
const DEFAULT_CONFIG: &str = "editdist.lua";

/// Edit distance between texts or files and suggestions for misspelled words.
#[derive(clap::Parser, Debug)]
#[command(about, version, long_about=None)]
struct Cli {
    /// the two texts to compare, or in suggest mode the word followed by its candidates
    inputs: Vec<String>,

    /// treat inputs as paths and compare the contents of the files, in suggest mode the
    /// whitespace separated candidates are read from the files
    #[arg(short, long)]
    files: bool,

    /// elements the distance is computed over
    #[arg(short, long)]
    #[clap(value_enum)]
    unit: Option<Unit>,

    /// cost of substituting one element by another, inserting and deleting always cost 1
    #[arg(long, allow_negative_numbers = true)]
    cost: Option<i64>,

    /// rank the candidates by their distance to the first input
    #[arg(long)]
    suggest: bool,

    /// maximum amount of suggestions
    #[arg(short, long)]
    limit: Option<usize>,

    /// maximum distance of a suggestion, defaults to a third of the words length
    #[arg(short, long)]
    threshold: Option<usize>,

    /// print the result as pretty printed json
    #[arg(long)]
    json: bool,

    /// path to the configuration, lua or toml [default: editdist.lua]
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// instruct editdist to ignore the configuration, if specified
    #[arg(short, long)]
    ignore_config: bool,

    /// disable stdout/stderr output, only the exit code is set
    #[arg(short = 's', long)]
    silent: bool,
}

#[derive(Debug, serde::Serialize)]
struct Report<'a> {
    a: &'a str,
    b: &'a str,
    unit: Unit,
    cost: Cost,
    distance: usize,
}

/// configuration merges the configuration file and the flags of args, flags take precedence.
/// default_file is read if args does not name a configuration
fn configuration(
    args: &Cli,
    default_file: &str,
    b: &mut builder::Builder,
) -> Result<Config, Error> {
    let mut config = Config::default();

    if !args.ignore_config {
        let file_name = args.config.as_deref().unwrap_or(default_file);
        // a missing default configuration is not worth a warning, a missing explicit one is
        if args.config.is_some() || fs::exists(file_name).unwrap_or(false) {
            match Config::load(file_name) {
                Ok(conf) => config = conf,
                Err(err) => {
                    if !args.silent {
                        error::warn(b, &err.to_string());
                    }
                }
            }
        }
    }

    if let Some(cost) = args.cost {
        config.cost = Cost::new(cost)?;
    }
    if let Some(unit) = args.unit {
        config.unit = unit;
    }
    if let Some(limit) = args.limit {
        config.suggestions = limit;
    }
    if args.threshold.is_some() {
        config.threshold = args.threshold;
    }

    Ok(config)
}

fn read(path: &str) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|err| Error::Read {
        path: path.into(),
        reason: err.to_string(),
    })
}

/// distance compares exactly two inputs, the exit code is 1 if they differ and output is disabled
fn distance(args: &Cli, config: &Config, b: &mut builder::Builder) -> Result<i32, Error> {
    let [a, other] = args.inputs.as_slice() else {
        return Err(Error::Arity {
            expected: "exactly 2",
            got: args.inputs.len(),
        });
    };

    let (left, right) = if args.files {
        (read(a)?, read(other)?)
    } else {
        (a.clone(), other.clone())
    };
    let distance = config.unit.distance(&left, &right, config.cost);

    if args.json {
        let report = Report {
            a,
            b: other,
            unit: config.unit,
            cost: config.cost,
            distance,
        };
        b.write_string(serde_json::to_string_pretty(&report).unwrap_or_default());
    } else {
        b.write_string(distance.to_string());
    }
    b.write_char('\n');

    Ok(if args.silent && distance != 0 { 1 } else { 0 })
}

/// suggestions ranks the candidates against the first input, the exit code is 1 if none is close
/// enough
fn suggestions(args: &Cli, config: &Config, b: &mut builder::Builder) -> Result<i32, Error> {
    let Some((word, rest)) = args.inputs.split_first() else {
        return Err(Error::Arity {
            expected: "at least 1",
            got: 0,
        });
    };

    let candidates = if args.files {
        let mut candidates = vec![];
        for path in rest {
            candidates.extend(read(path)?.split_whitespace().map(String::from));
        }
        candidates
    } else {
        rest.to_vec()
    };

    let threshold = config
        .threshold
        .unwrap_or_else(|| default_threshold(word));
    let found = suggest(word, &candidates, config.cost, threshold, config.suggestions);

    if args.json {
        b.write_string(serde_json::to_string_pretty(&found).unwrap_or_default());
        b.write_char('\n');
    } else if found.is_empty() {
        error::err(b, &format!("no suggestions for '{}'", word));
    } else {
        print_suggestions(b, &found);
    }

    Ok(if found.is_empty() { 1 } else { 0 })
}

fn print_suggestions(b: &mut builder::Builder, found: &[Suggestion]) {
    print_str_colored(b, "did you mean", error::Color::Cyan);
    b.write_str(": ");
    for (i, s) in found.iter().enumerate() {
        print_str_colored(b, &s.candidate, error::Color::Green);
        b.write_string(format!(" ({})", s.distance));
        if i + 1 != found.len() {
            b.write_str(", ");
        }
    }
    b.write_char('\n');
}

fn run(args: &Cli, b: &mut builder::Builder) -> Result<i32, Error> {
    let config = configuration(args, DEFAULT_CONFIG, b)?;
    if args.suggest {
        suggestions(args, &config, b)
    } else {
        distance(args, &config, b)
    }
}

fn main() {
    let args = Cli::parse();
    let mut error_string_builder = builder::Builder::default();

    let code = match run(&args, &mut error_string_builder) {
        Ok(code) => code,
        Err(err) => {
            err.print(&mut error_string_builder);
            1
        }
    };

    if !args.silent && !error_string_builder.is_empty() {
        print!("{}", error_string_builder.string());
    }

    exit(code);
}
