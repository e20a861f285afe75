//! Unit tests for ra-session.

#[cfg(test)]
mod sink {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use ra_core::StopId;
    use ra_progress::{AnnouncementEvent, AnnouncementKind};

    use crate::{AnnouncementSink, ClipSink, RecordingSink};

    fn arrival_b() -> AnnouncementEvent {
        AnnouncementEvent::new(AnnouncementKind::Arrival, StopId(1), "B")
    }

    #[test]
    fn recorder_keeps_order_and_text() {
        let mut rec = RecordingSink::new();
        rec.announce(&AnnouncementEvent::new(AnnouncementKind::Approaching, StopId(1), "B"));
        rec.announce(&arrival_b());
        assert_eq!(rec.messages(), ["Approaching bus stop B", "Now arriving at bus stop B"]);
    }

    #[test]
    fn clip_sink_plays_existing_clips_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("arriveB.mp3"), b"").unwrap();

        let played = RefCell::new(Vec::<PathBuf>::new());
        let mut sink = ClipSink::new(dir.path(), |p: &std::path::Path| played.borrow_mut().push(p.to_path_buf()));

        sink.announce(&arrival_b());
        sink.announce(&AnnouncementEvent::new(AnnouncementKind::FinalArrival, StopId(1), "B"));

        assert_eq!(*played.borrow(), [dir.path().join("arriveB.mp3")]);
    }

    #[test]
    fn clip_extension_override() {
        let sink = ClipSink::new("clips", |_: &std::path::Path| {}).extension(".wav");
        assert_eq!(sink.clip_path(&arrival_b()), PathBuf::from("clips/arriveB.wav"));
    }
}

#[cfg(test)]
mod csv_log {
    use ra_core::{Direction, StopId};
    use ra_progress::{AnnouncementEvent, AnnouncementKind};

    use crate::{AnnouncementSink, CsvAnnouncementLog};

    #[test]
    fn writes_header_and_rows() {
        let mut log = CsvAnnouncementLog::from_writer(Vec::new()).unwrap();
        assert!(log.is_empty());
        log.announce(&AnnouncementEvent::new(AnnouncementKind::FinalArrival, StopId(2), "C"));
        log.on_reverse(Direction::CtoA);
        log.announce(&AnnouncementEvent::new(AnnouncementKind::Approaching, StopId(1), "B"));
        assert_eq!(log.len(), 2);
        assert!(log.take_error().is_none());

        let text = String::from_utf8(log.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "seq,unix_time_secs,direction,kind,stop_id,stop_name,message");
        assert!(lines[1].starts_with("0,"));
        assert!(lines[1].ends_with(",AtoC,final_arrival,2,C,\"We have arrived at the final destination, bus stop C\""));
        assert!(lines[2].ends_with(",CtoA,approaching,1,B,Approaching bus stop B"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn create_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("announcements.csv");
        let mut log = CsvAnnouncementLog::create(&path).unwrap();
        log.on_start(Direction::AtoC);
        log.announce(&AnnouncementEvent::new(AnnouncementKind::Arrival, StopId(1), "B"));
        log.finish().unwrap();
        log.finish().unwrap();
        drop(log);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("arrival,1,B,Now arriving at bus stop B"));
    }
}

#[cfg(test)]
mod session {
    use ra_core::{CoreError, Direction, GeoPoint};
    use ra_progress::{AnnouncementKind, ProgressTracker};
    use ra_route::default_route;
    use ra_source::{PollEvent, SourceError};

    use crate::{RecordingSink, Session, SessionError, SourceMode};

    fn session() -> Session {
        Session::new(ProgressTracker::with_defaults(default_route()))
    }

    fn stop(s: &Session, name: &str) -> GeoPoint {
        let route = s.tracker().route();
        route.stop(route.find_stop(name).unwrap()).position
    }

    #[test]
    fn defaults() {
        let s = session();
        assert_eq!(s.mode(), SourceMode::Gps);
        assert_eq!(s.direction(), Direction::AtoC);
        assert!(!s.is_started());
        assert!(s.position().is_none());
        assert!(s.status_line().is_none());
        assert_eq!(SourceMode::Gps.toggled(), SourceMode::Demo);
        assert_eq!(SourceMode::Demo.to_string(), "DEMO");
    }

    #[test]
    fn positions_before_start_do_not_drive_progress() {
        let mut s = session();
        let mut rec = RecordingSink::new();
        let b = stop(&s, "B");

        assert!(s.apply_position(b, &mut rec).is_none());
        assert_eq!(s.position(), Some(b));
        assert_eq!(s.distances().len(), 3);
        assert!(s.distances()[1] < 1.0);
        assert!(rec.events.is_empty());
        assert!(s.progress().is_none());
    }

    #[test]
    fn started_route_announces_to_sink() {
        let mut s = session();
        let mut rec = RecordingSink::new();
        s.start_route(Direction::AtoC, &mut rec);
        let b = stop(&s, "B");

        let outcome = s.apply_position(b, &mut rec).unwrap();
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(rec.events[0].kind, AnnouncementKind::Arrival);
        assert_eq!(rec.events[0].stop_name, "B");
        assert_eq!(s.status_line().as_deref(), Some("0m from BUS STOP B"));
        assert!(s.progress().unwrap().within_range);
    }

    #[test]
    fn no_fix_keeps_last_position() {
        let mut s = session();
        let mut rec = RecordingSink::new();
        s.start_route(Direction::AtoC, &mut rec);
        let b = stop(&s, "B");

        s.apply_poll_event(&PollEvent::Fix(b), &mut rec);
        let before = *s.progress().unwrap();

        assert!(s.apply_poll_event(&PollEvent::NoFix, &mut rec).is_none());
        assert_eq!(s.position(), Some(b));
        assert!(s.fix_lost());

        assert!(s.apply_poll_event(&PollEvent::Failed("timeout".into()), &mut rec).is_none());
        assert_eq!(*s.progress().unwrap(), before);
        assert_eq!(rec.events.len(), 1);

        s.apply_poll_event(&PollEvent::Fix(b), &mut rec);
        assert!(!s.fix_lost());
    }

    #[test]
    fn manual_input_requires_demo_mode() {
        let mut s = session();
        let mut rec = RecordingSink::new();
        assert!(matches!(
            s.set_fraction(0.5, &mut rec),
            Err(SessionError::WrongMode { expected: SourceMode::Demo, actual: SourceMode::Gps, .. })
        ));
        assert!(matches!(s.set_coords("7.1059,124.83141", &mut rec), Err(SessionError::WrongMode { .. })));
        assert!(s.position().is_none());
    }

    #[test]
    fn invalid_manual_input_changes_nothing() {
        let mut s = session();
        let mut rec = RecordingSink::new();
        s.set_mode(SourceMode::Demo);
        s.start_route(Direction::AtoC, &mut rec);
        let before = *s.progress().unwrap();

        let err = s.set_coords("999,124.8", &mut rec).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Source(SourceError::OutOfRange(CoreError::OutOfRange { .. }))
        ));
        assert!(err.to_string().starts_with("Invalid latitude or longitude"));
        assert!(matches!(s.set_coords("nonsense", &mut rec), Err(SessionError::Source(SourceError::Malformed(_)))));
        assert!(s.set_fraction(1.5, &mut rec).is_err());

        assert_eq!(*s.progress().unwrap(), before);
        assert!(s.position().is_none());
        assert_eq!(s.fraction(), 0.0);
        assert!(rec.events.is_empty());
    }

    #[test]
    fn typed_coordinates_drive_progress() {
        let mut s = session();
        let mut rec = RecordingSink::new();
        s.set_mode(SourceMode::Demo);
        s.start_route(Direction::AtoC, &mut rec);

        s.set_coords("7.1059, 124.83141", &mut rec).unwrap();
        assert_eq!(rec.messages(), ["Now arriving at bus stop B"]);
    }

    #[test]
    fn reverse_gating() {
        let mut s = session();
        let mut rec = RecordingSink::new();
        assert!(matches!(s.reverse(&mut rec), Err(SessionError::NotStarted)));

        s.set_mode(SourceMode::Demo);
        s.start_route(Direction::AtoC, &mut rec);
        s.set_fraction(0.5, &mut rec).unwrap();
        assert!(!s.can_reverse());
        assert!(!s.reverse(&mut rec).unwrap());
        assert_eq!(s.direction(), Direction::AtoC);
        assert!(rec.reversals.is_empty());
    }

    #[test]
    fn slider_round_trip() {
        let mut s = session();
        let mut rec = RecordingSink::new();
        s.set_mode(SourceMode::Demo);
        s.start_route(Direction::AtoC, &mut rec);

        for step in 0..=100 {
            s.set_fraction(step as f64 / 100.0, &mut rec).unwrap();
        }
        assert_eq!(
            rec.messages(),
            [
                "Approaching bus stop B",
                "Now arriving at bus stop B",
                "Approaching bus stop C",
                "We have arrived at the final destination, bus stop C",
            ]
        );
        assert!(s.can_reverse());
        assert!(s.reverse(&mut rec).unwrap());
        assert_eq!(s.direction(), Direction::CtoA);
        assert_eq!(rec.reversals, [Direction::CtoA]);

        rec.events.clear();
        for step in (0..=100).rev() {
            s.set_fraction(step as f64 / 100.0, &mut rec).unwrap();
        }
        let last = rec.events.last().unwrap();
        assert_eq!(last.kind, AnnouncementKind::FinalArrival);
        assert_eq!(last.stop_name, "A");
        assert_eq!(s.fraction(), 0.0);
    }

    #[test]
    fn restart_discards_progress() {
        let mut s = session();
        let mut rec = RecordingSink::new();
        s.start_route(Direction::AtoC, &mut rec);
        let b = stop(&s, "B");
        s.apply_position(b, &mut rec);
        s.start_route(Direction::AtoC, &mut rec);
        assert_eq!(*s.progress().unwrap(), s.tracker().start(Direction::AtoC));
    }
}

#[cfg(test)]
mod driver {
    use std::collections::VecDeque;
    use std::time::Duration;

    use ra_core::GeoPoint;
    use ra_progress::ProgressTracker;
    use ra_route::default_route;
    use ra_source::{PollConfig, PollEvent, PositionFetcher, PositionRecord, SourceResult};

    use crate::{Driver, RecordingSink, Session, SourceMode};

    #[derive(Clone)]
    struct ScriptedFetcher(VecDeque<PositionRecord>);

    impl PositionFetcher for ScriptedFetcher {
        async fn fetch(&mut self) -> SourceResult<PositionRecord> {
            Ok(self.0.pop_front().unwrap_or_default())
        }
    }

    fn driver() -> Driver<ScriptedFetcher> {
        let session = Session::new(ProgressTracker::with_defaults(default_route()));
        let script = ScriptedFetcher(VecDeque::from([
            PositionRecord::new(7.1059, 124.83141),
            PositionRecord::new(7.10556, 124.82827),
        ]));
        Driver::new(session, script, PollConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn idle_until_gps_selected() {
        let mut d = driver();
        let mut rec = RecordingSink::new();
        assert!(!d.is_polling());
        assert_eq!(d.next_poll(&mut rec).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn gps_mode_applies_polled_fixes() {
        let mut d = driver();
        let mut rec = RecordingSink::new();
        d.session_mut().start_route(ra_core::Direction::AtoC, &mut rec);
        d.set_mode(SourceMode::Gps).unwrap();
        assert!(d.is_polling());

        assert_eq!(d.next_poll(&mut rec).await, Some(PollEvent::Fix(GeoPoint::new(7.1059, 124.83141))));
        assert_eq!(rec.messages(), ["Now arriving at bus stop B"]);
        d.next_poll(&mut rec).await;
        assert_eq!(
            rec.messages().last().map(String::as_str),
            Some("We have arrived at the final destination, bus stop C")
        );

        assert_eq!(d.next_poll(&mut rec).await, Some(PollEvent::NoFix));
        assert!(d.session().fix_lost());
        assert_eq!(d.session().position(), Some(GeoPoint::new(7.10556, 124.82827)));
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_gps_cancels_and_drains() {
        let mut d = driver();
        let mut rec = RecordingSink::new();
        d.set_mode(SourceMode::Gps).unwrap();
        // Let a few ticks queue up unread.
        tokio::time::sleep(Duration::from_millis(2500)).await;

        d.set_mode(SourceMode::Demo).unwrap();
        assert!(!d.is_polling());
        assert_eq!(d.session().mode(), SourceMode::Demo);
        assert_eq!(d.next_poll(&mut rec).await, None);
        assert!(d.session().position().is_none());

        d.session_mut().set_fraction(0.0, &mut rec).unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(d.session().position(), Some(GeoPoint::new(7.10488, 124.83347)));
    }

    #[tokio::test(start_paused = true)]
    async fn reentering_gps_polls_again() {
        let mut d = driver();
        let mut rec = RecordingSink::new();
        d.set_mode(SourceMode::Gps).unwrap();
        d.set_mode(SourceMode::Gps).unwrap();
        d.set_mode(SourceMode::Demo).unwrap();
        d.set_mode(SourceMode::Gps).unwrap();
        // Fresh clone of the fetcher: the script starts over.
        assert_eq!(d.next_poll(&mut rec).await, Some(PollEvent::Fix(GeoPoint::new(7.1059, 124.83141))));
    }
}
