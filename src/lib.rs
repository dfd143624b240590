/// builder collects output before it is written in one go
pub mod builder;
/// error holds the error taxonomy and the colored warn/err reporting
pub mod error;
/// lev implements the levenshtein distance over any sequence of comparable elements, this is used
/// to compare texts split by a unit and to rank candidates for a misspelled word
pub mod lev;
/// suggest ranks candidates by their distance to a possibly misspelled word
pub mod suggest;
/// types holds all shared types between the above modules
pub mod types;

// this is necessary to track the call depth for indentation when printing the call tree with
// the trace feature enabled
#[cfg(feature = "trace")]
thread_local! {
    pub(crate) static CALL_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}
