use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::LessonPage;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("progress {value} exceeds {max}", max = Progress::MAX)]
    OutOfRange { value: u8 },

    #[error("progress {value} is not a multiple of {step}", step = Progress::STEP)]
    Misaligned { value: u8 },
}

/// Percentage gauge of how far a session has moved through the walkthrough.
///
/// Always a multiple of [`Progress::STEP`] in `0..=100`. The displayed page is
/// a pure function of this value.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const STEP: u8 = 20;
    pub const MAX: u8 = 100;

    /// Progress of a freshly created session.
    pub const START: Self = Self(0);

    /// Progress once a submitted paper has finished processing.
    pub const FIRST_LESSON: Self = Self(Self::STEP);

    /// # Errors
    ///
    /// Returns `ProgressError` if `value` is above 100 or not a multiple of 20.
    pub fn new(value: u8) -> Result<Self, ProgressError> {
        if value > Self::MAX {
            return Err(ProgressError::OutOfRange { value });
        }
        if value % Self::STEP != 0 {
            return Err(ProgressError::Misaligned { value });
        }
        Ok(Self(value))
    }

    pub(crate) fn from_steps(steps: u8) -> Self {
        Self(steps.saturating_mul(Self::STEP).min(Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn page(self) -> LessonPage {
        LessonPage::for_percent(self.0)
    }

    /// One step further along, capped at 100.
    #[must_use]
    pub fn stepped(self) -> Self {
        Self(self.0.saturating_add(Self::STEP).min(Self::MAX))
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= Self::MAX
    }

    /// Whether footer segment `index` (zero-based) is highlighted.
    #[must_use]
    pub fn segment_lit(self, index: usize) -> bool {
        index
            .checked_add(1)
            .and_then(|segment| segment.checked_mul(usize::from(Self::STEP)))
            .is_some_and(|threshold| usize::from(self.0) >= threshold)
    }
}

impl TryFrom<u8> for Progress {
    type Error = ProgressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
