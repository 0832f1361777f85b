//! Integration tests for zdb-output.

#[cfg(test)]
mod csv_tests {
    use std::collections::BTreeMap;

    use tempfile::TempDir;

    use zdb_core::{NodeId, RequestId};
    use zdb_sim::{InsertionKind, InsertionRecord, RequestRecord, SimOutput};

    use crate::csv::CsvWriter;
    use crate::row::{InsertionRow, RequestRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn request_row(id: u32) -> RequestRow {
        RequestRow {
            rate:          0.5,
            request_id:    id,
            origin:        id + 1,
            destination:   id + 3,
            req_epoch:     id as f64 + 0.25,
            pickup_epoch:  id as f64 + 1.25,
            dropoff_epoch: id as f64 + 3.25,
        }
    }

    fn insertion_row(epoch: f64) -> InsertionRow {
        InsertionRow {
            rate:            0.5,
            epoch,
            stoplist_length: 2,
            stoplist_volume: 4,
            rest_volume:     1,
            pickup_index:    0,
            dropoff_index:   1,
            insertion_type:  3,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("req_data.csv").exists());
        assert!(dir.path().join("insertion_data.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("req_data.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["rate", "request_id", "origin", "destination", "req_epoch", "pickup_epoch",
             "dropoff_epoch"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("insertion_data.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["rate", "epoch", "stoplist_length", "stoplist_volume", "rest_volume",
             "pickup_index", "dropoff_index", "insertion_type"]
        );
    }

    #[test]
    fn csv_request_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_requests(&[request_row(0), request_row(1), request_row(2)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("req_data.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "0"); // request_id
        assert_eq!(&rows[0][2], "1"); // origin
        assert_eq!(&rows[1][1], "1");
        assert_eq!(&rows[2][4], "2.25"); // req_epoch
    }

    #[test]
    fn csv_insertion_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_insertions(&[insertion_row(6.0)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("insertion_data.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "6");  // epoch
        assert_eq!(&rows[0][7], "3");  // insertion_type
    }

    #[test]
    fn write_run_flattens_a_sim_output() {
        let mut requests = BTreeMap::new();
        requests.insert(
            RequestId(0),
            RequestRecord {
                origin:        NodeId(1),
                destination:   NodeId(3),
                req_epoch:     0.25,
                pickup_epoch:  1.25,
                dropoff_epoch: 3.25,
            },
        );
        let output = SimOutput {
            requests,
            insertions: vec![InsertionRecord {
                epoch:           0.25,
                stoplist_len:    1,
                stoplist_volume: 4,
                rest_volume:     0,
                pickup_index:    0,
                dropoff_index:   1,
                kind:            InsertionKind::NeitherOnRoute,
            }],
        };

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_run(1.5, &output).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("req_data.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1.5"); // rate
        assert_eq!(&rows[0][3], "3");   // destination

        let mut rdr2 = csv::Reader::from_path(dir.path().join("insertion_data.csv")).unwrap();
        let rows2: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows2.len(), 1);
        assert_eq!(&rows2[0][7], "3"); // NeitherOnRoute
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_requests(&[request_row(0)]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
