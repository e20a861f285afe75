//! CSV announcement log.
//!
//! One row per announcement:
//!
//! ```text
//! seq,unix_time_secs,direction,kind,stop_id,stop_name,message
//! 0,1760000000,AtoC,approaching,1,B,Approaching bus stop B
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use csv::Writer;

use ra_core::Direction;
use ra_progress::AnnouncementEvent;

use crate::{AnnouncementSink, SessionError, SessionResult};

const HEADER: [&str; 7] =
    ["seq", "unix_time_secs", "direction", "kind", "stop_id", "stop_name", "message"];

/// One logged announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementRow {
    pub seq:            u64,
    pub unix_time_secs: u64,
    pub direction:      Direction,
    pub event:          AnnouncementEvent,
}

/// An [`AnnouncementSink`] that appends every announcement to a CSV file.
///
/// Write errors are stored internally because sink methods have no return
/// value.  Check [`take_error`][Self::take_error] after the run.
pub struct CsvAnnouncementLog<W: Write> {
    writer:     Writer<W>,
    direction:  Direction,
    seq:        u64,
    finished:   bool,
    last_error: Option<SessionError>,
}

impl CsvAnnouncementLog<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> SessionResult<Self> {
        log::info!("logging announcements to {}", path.display());
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvAnnouncementLog<W> {
    pub fn from_writer(inner: W) -> SessionResult<Self> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self {
            writer,
            direction:  Direction::default(),
            seq:        0,
            finished:   false,
            last_error: None,
        })
    }

    /// Announcements written so far.
    pub fn len(&self) -> u64 {
        self.seq
    }

    pub fn is_empty(&self) -> bool {
        self.seq == 0
    }

    /// Write one row.
    pub fn write_row(&mut self, row: &AnnouncementRow) -> SessionResult<()> {
        self.writer.write_record(&[
            row.seq.to_string(),
            row.unix_time_secs.to_string(),
            row.direction.to_string(),
            row.event.kind.as_str().to_string(),
            row.event.stop.index().to_string(),
            row.event.stop_name.clone(),
            row.event.message(),
        ])?;
        Ok(())
    }

    /// Flush buffered rows.  Idempotent.
    pub fn finish(&mut self) -> SessionResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<SessionError> {
        self.last_error.take()
    }

    /// Flush and unwrap the underlying writer.
    pub fn into_inner(self) -> SessionResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| SessionError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
    }

    fn store_err(&mut self, result: SessionResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> AnnouncementSink for CsvAnnouncementLog<W> {
    fn announce(&mut self, event: &AnnouncementEvent) {
        let row = AnnouncementRow {
            seq:            self.seq,
            unix_time_secs: unix_now(),
            direction:      self.direction,
            event:          event.clone(),
        };
        self.seq += 1;
        let result = self.write_row(&row);
        self.store_err(result);
    }

    fn on_reverse(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn on_start(&mut self, direction: Direction) {
        self.direction = direction;
    }
}

fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}
