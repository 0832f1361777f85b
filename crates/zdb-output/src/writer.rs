//! The `OutputWriter` trait implemented by backend writers.

use zdb_sim::SimOutput;

use crate::{InsertionRow, OutputResult, RequestRow};

pub trait OutputWriter {
    /// Write a batch of request rows.
    fn write_requests(&mut self, rows: &[RequestRow]) -> OutputResult<()>;

    /// Write a batch of insertion rows.
    fn write_insertions(&mut self, rows: &[InsertionRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write everything one simulation run produced, tagged with its
    /// normalized request rate.
    fn write_run(&mut self, rate: f64, output: &SimOutput) -> OutputResult<()> {
        let requests: Vec<RequestRow> = output
            .requests
            .iter()
            .map(|(&id, record)| RequestRow::from_record(rate, id, record))
            .collect();
        self.write_requests(&requests)?;

        let insertions: Vec<InsertionRow> =
            output.insertions.iter().map(|r| InsertionRow::from_record(rate, r)).collect();
        self.write_insertions(&insertions)
    }
}
