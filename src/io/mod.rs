//! Persistence for point sets.
//!
//! One format is supported: a line-oriented CSV-style text file, one point
//! per line (see [`csv`]).

pub mod csv;

pub use csv::{load_csv, read_csv, save_csv, write_csv};
