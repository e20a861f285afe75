//! Direction of travel over the stop list.

use std::str::FromStr;

use crate::{CoreError, StopId};

/// The active traversal order.
///
/// `AtoC` walks the stop list front to back, `CtoA` back to front.  The names
/// come from the first and last stop of the built-in three-stop line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    AtoC,
    CtoA,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::AtoC => Direction::CtoA,
            Direction::CtoA => Direction::AtoC,
        }
    }

    /// Index delta applied when moving to the following stop.
    #[inline]
    pub fn delta(self) -> i64 {
        match self {
            Direction::AtoC => 1,
            Direction::CtoA => -1,
        }
    }

    /// First stop of a traversal over `stop_count` stops.
    #[inline]
    pub fn origin(self, stop_count: usize) -> StopId {
        match self {
            Direction::AtoC => StopId(0),
            Direction::CtoA => StopId(stop_count.saturating_sub(1) as u32),
        }
    }

    /// Last stop of a traversal over `stop_count` stops.
    #[inline]
    pub fn terminal(self, stop_count: usize) -> StopId {
        self.reversed().origin(stop_count)
    }

    /// The stop after `stop` in this direction, or `None` past the terminal.
    pub fn step(self, stop: StopId, stop_count: usize) -> Option<StopId> {
        let next = stop.0 as i64 + self.delta();
        if next < 0 || next >= stop_count as i64 {
            None
        } else {
            Some(StopId(next as u32))
        }
    }

    /// Label used in logs and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::AtoC => "AtoC",
            Direction::CtoA => "CtoA",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "AtoC" | "atoc" | "a-to-c" => Ok(Direction::AtoC),
            "CtoA" | "ctoa" | "c-to-a" => Ok(Direction::CtoA),
            other => Err(CoreError::UnknownDirection(other.to_owned())),
        }
    }
}
