//! Announcement descriptors emitted by the tracker.

use ra_core::StopId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnouncementKind {
    /// The vehicle entered the far radius of the next stop.
    Approaching,
    /// The vehicle reached an intermediate stop.
    Arrival,
    /// The vehicle reached the terminal stop of its direction.
    FinalArrival,
}

impl AnnouncementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnnouncementKind::Approaching  => "approaching",
            AnnouncementKind::Arrival      => "arrival",
            AnnouncementKind::FinalArrival => "final_arrival",
        }
    }
}

impl std::fmt::Display for AnnouncementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One announcement to render or play.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnouncementEvent {
    pub kind:      AnnouncementKind,
    pub stop:      StopId,
    pub stop_name: String,
}

impl AnnouncementEvent {
    pub fn new(kind: AnnouncementKind, stop: StopId, stop_name: impl Into<String>) -> Self {
        Self { kind, stop, stop_name: stop_name.into() }
    }

    /// Spoken/displayed text.
    pub fn message(&self) -> String {
        match self.kind {
            AnnouncementKind::Approaching => {
                format!("Approaching bus stop {}", self.stop_name)
            }
            AnnouncementKind::Arrival => {
                format!("Now arriving at bus stop {}", self.stop_name)
            }
            AnnouncementKind::FinalArrival => {
                format!("We have arrived at the final destination, bus stop {}", self.stop_name)
            }
        }
    }

    /// Stem of the pre-recorded audio clip for this event, e.g. `100B`,
    /// `arriveB`, `finalC`.
    pub fn clip_key(&self) -> String {
        let prefix = match self.kind {
            AnnouncementKind::Approaching  => "100",
            AnnouncementKind::Arrival      => "arrive",
            AnnouncementKind::FinalArrival => "final",
        };
        format!("{prefix}{}", self.stop_name)
    }
}

impl std::fmt::Display for AnnouncementEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.stop_name)
    }
}
