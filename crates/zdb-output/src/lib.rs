//! `zdb-output` — tabular output for the zero-detour bus simulator.
//!
//! A finished run's [`zdb_sim::SimOutput`] is flattened into two row types
//! and handed to an [`OutputWriter`].  The one backend here writes CSV:
//!
//! | File                 | Contents                        |
//! |----------------------|---------------------------------|
//! | `req_data.csv`       | one row per served request      |
//! | `insertion_data.csv` | one row per insertion decision  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use zdb_output::{CsvWriter, OutputWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! for run in sweep_request_rates(&view, &config) {
//!     writer.write_run(run.rate, &run.output?)?;
//! }
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{InsertionRow, RequestRow};
pub use writer::OutputWriter;
