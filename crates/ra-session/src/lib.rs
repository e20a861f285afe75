//! `ra-session` — the layer between position sources, the progress tracker,
//! and whatever plays or records announcements.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`sink`]    | `AnnouncementSink` trait, `LogSink`, `RecordingSink`, `ClipSink` |
//! | [`csv_log`] | `CsvAnnouncementLog` — one CSV row per announcement             |
//! | [`session`] | `Session` — route-started, mode, and last-known-position state  |
//! | [`driver`]  | `Driver` — owns the poll subscription for GPS mode              |
//! | [`error`]   | `SessionError`, `SessionResult<T>`                              |
//!
//! A `Session` is synchronous.  Only the [`Driver`] touches the async
//! runtime, and only while the session is in [`SourceMode::Gps`].

pub mod csv_log;
pub mod driver;
pub mod error;
pub mod session;
pub mod sink;

#[cfg(test)]
mod tests;

pub use csv_log::{AnnouncementRow, CsvAnnouncementLog};
pub use driver::Driver;
pub use error::{SessionError, SessionResult};
pub use session::{Session, SourceMode};
pub use sink::{AnnouncementSink, ClipSink, LogSink, NoopSink, RecordingSink};
