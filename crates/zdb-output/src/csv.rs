//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `req_data.csv` — one row per served request,
//! - `insertion_data.csv` — one row per insertion decision.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{InsertionRow, OutputResult, RequestRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    requests:   Writer<File>,
    insertions: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut requests = Writer::from_path(dir.join("req_data.csv"))?;
        requests.write_record([
            "rate",
            "request_id",
            "origin",
            "destination",
            "req_epoch",
            "pickup_epoch",
            "dropoff_epoch",
        ])?;

        let mut insertions = Writer::from_path(dir.join("insertion_data.csv"))?;
        insertions.write_record([
            "rate",
            "epoch",
            "stoplist_length",
            "stoplist_volume",
            "rest_volume",
            "pickup_index",
            "dropoff_index",
            "insertion_type",
        ])?;

        Ok(Self {
            requests,
            insertions,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_requests(&mut self, rows: &[RequestRow]) -> OutputResult<()> {
        for row in rows {
            self.requests.write_record(&[
                row.rate.to_string(),
                row.request_id.to_string(),
                row.origin.to_string(),
                row.destination.to_string(),
                row.req_epoch.to_string(),
                row.pickup_epoch.to_string(),
                row.dropoff_epoch.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_insertions(&mut self, rows: &[InsertionRow]) -> OutputResult<()> {
        for row in rows {
            self.insertions.write_record(&[
                row.rate.to_string(),
                row.epoch.to_string(),
                row.stoplist_length.to_string(),
                row.stoplist_volume.to_string(),
                row.rest_volume.to_string(),
                row.pickup_index.to_string(),
                row.dropoff_index.to_string(),
                row.insertion_type.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.requests.flush()?;
        self.insertions.flush()?;
        Ok(())
    }
}
