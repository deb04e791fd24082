//! Integration tests for nav-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvTraceWriter;
    use crate::row::{LocationRow, NoticeRow, TrackRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn files_and_headers() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir, "agent_track.csv"), ["frame", "elapsed_secs", "x", "y", "z", "remaining"]);
        assert_eq!(headers(&dir, "notices.csv"), ["frame", "failure", "message"]);
        assert_eq!(headers(&dir, "locations.csv"), ["name", "x", "y", "z"]);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let _w = CsvTraceWriter::new(&nested).unwrap();
        assert!(nested.join("agent_track.csv").exists());
    }

    #[test]
    fn track_row_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_track(&TrackRow { frame: 4, elapsed_secs: 0.5, x: 1.0, y: 0.0, z: 2.5, remaining: 3 })
            .unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "agent_track.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "0.5000");
        assert_eq!(&rows[0][4], "2.5");
        assert_eq!(&rows[0][5], "3");
    }

    #[test]
    fn notice_with_comma_is_quoted() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        let message = "navigating from Gate A to Platform 2, east".to_owned();
        w.write_notice(&NoticeRow { frame: 1, failure: false, message: message.clone() }).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "notices.csv");
        assert_eq!(&rows[0][1], "0");
        assert_eq!(&rows[0][2], message);
    }

    #[test]
    fn locations_written_in_order() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        let rows = vec![
            LocationRow { name: "Gate A".into(), x: 0.0, y: 1.0, z: 0.0 },
            LocationRow { name: "Kiosk".into(), x: 4.0, y: 1.0, z: 2.0 },
        ];
        w.write_locations(&rows).unwrap();
        w.finish().unwrap();

        let read = records(&dir, "locations.csv");
        assert_eq!(read.len(), 2);
        assert_eq!(&read[1][0], "Kiosk");
        assert_eq!(&read[1][1], "4");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use nav_core::{NavConfig, point};
    use nav_mesh::{GraphNavMesh, MeshGeometry};
    use nav_request::{LocationMap, NavRequest};
    use nav_sim::{NavObserver, Notice, SessionBuilder};

    use crate::row::{LocationRow, NoticeRow, TrackRow};
    use crate::writer::TraceWriter;
    use crate::{CsvTraceWriter, OutputError, OutputResult, TraceObserver};

    /// Collects rows in memory.
    #[derive(Default)]
    struct MemWriter {
        track:     Vec<TrackRow>,
        notices:   Vec<NoticeRow>,
        locations: Vec<LocationRow>,
        finishes:  usize,
    }

    impl TraceWriter for MemWriter {
        fn write_track(&mut self, row: &TrackRow) -> OutputResult<()> {
            self.track.push(*row);
            Ok(())
        }
        fn write_notice(&mut self, row: &NoticeRow) -> OutputResult<()> {
            self.notices.push(row.clone());
            Ok(())
        }
        fn write_locations(&mut self, rows: &[LocationRow]) -> OutputResult<()> {
            self.locations.extend_from_slice(rows);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    /// Fails every write.
    struct BrokenWriter;

    impl TraceWriter for BrokenWriter {
        fn write_track(&mut self, _row: &TrackRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_notice(&mut self, _row: &NoticeRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("second failure")))
        }
        fn write_locations(&mut self, _rows: &[LocationRow]) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn corridor() -> MeshGeometry {
        let mut g = MeshGeometry::new();
        let mut rows = Vec::new();
        for k in 0..=3 {
            let z = k as f32 * 2.0;
            rows.push((g.add_vertex(point(-1.0, 0.0, z)), g.add_vertex(point(1.0, 0.0, z))));
        }
        for k in 0..3 {
            let (a, b) = rows[k];
            let (d, c) = rows[k + 1];
            g.add_quad(a, b, c, d);
        }
        g
    }

    fn station() -> LocationMap {
        [("Gate A", point(0.0, 0.0, 0.5)), ("Exit", point(0.0, 0.0, 5.5))].into_iter().collect()
    }

    #[test]
    fn records_track_at_interval() {
        let config = NavConfig { max_frames: Some(10), ..NavConfig::default() };
        let mut session = SessionBuilder::new(config, GraphNavMesh::new()).build().unwrap();
        let mut obs = TraceObserver::new(MemWriter::default(), 5);
        session.run(&mut obs).unwrap();

        let w = obs.into_writer();
        let frames: Vec<u64> = w.track.iter().map(|r| r.frame).collect();
        assert_eq!(frames, vec![0, 5]);
        assert_eq!(w.track[0].remaining, 0);
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn records_notices_and_locations() {
        let geometry = corridor();
        let mut session = SessionBuilder::new(NavConfig::default(), GraphNavMesh::with_zone(NavConfig::default().zone, &geometry).unwrap())
            .locations(station())
            .build()
            .unwrap();
        let mut obs = TraceObserver::new(MemWriter::default(), 1);
        obs.dump_locations(&session.locations);

        session.request(&NavRequest::locations("Gate A", "Nowhere"), &mut obs).unwrap_err();
        session.request(&NavRequest::locations("Gate A", "Exit"), &mut obs).unwrap();
        session.run_frames(600, 1.0 / 60.0, &mut obs);
        obs.finish();

        let w = obs.into_writer();
        let messages: Vec<&str> = w.notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec![
            "Invalid points selected.",
            "navigating from Gate A to Exit",
            "Destination is reached!",
        ]);
        assert!(w.notices[0].failure);
        assert_eq!(w.locations.len(), 2);
        assert_eq!(w.track.len(), 600);
        assert_eq!(w.track.last().map(|r| r.remaining), Some(0));
    }

    #[test]
    fn keeps_first_error() {
        let mut obs = TraceObserver::new(BrokenWriter, 1);
        let store = nav_mobility::PathStore::new(point(0.0, 0.0, 0.0));
        obs.on_frame_end(nav_core::Frame(0), 0.0, &store, &nav_mobility::TickOutcome::IDLE);
        obs.on_notice(nav_core::Frame(0), &Notice::DestinationReached);

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = NavConfig { max_frames: Some(3), ..NavConfig::default() };
        let mut session = SessionBuilder::new(config, GraphNavMesh::new()).build().unwrap();
        let mut obs = TraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap(), 1);
        session.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_track.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3);
    }
}
