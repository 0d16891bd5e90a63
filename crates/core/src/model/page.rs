use serde::{Deserialize, Serialize};
use std::fmt;

use super::Progress;

/// One of the fixed screens a walkthrough can show.
///
/// Pages are ordered: a session only ever moves forward through them, and the
/// page is always derived from the session's [`Progress`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LessonPage {
    UploadSelect,
    Prerequisites,
    KnowledgeMap,
    Attention,
    FeedForward,
    Embeddings,
}

impl LessonPage {
    /// Every page, in walkthrough order.
    pub const ALL: [Self; 6] = [
        Self::UploadSelect,
        Self::Prerequisites,
        Self::KnowledgeMap,
        Self::Attention,
        Self::FeedForward,
        Self::Embeddings,
    ];

    /// Instructional pages shown after a paper has been submitted.
    pub const CONTENT: [Self; 5] = [
        Self::Prerequisites,
        Self::KnowledgeMap,
        Self::Attention,
        Self::FeedForward,
        Self::Embeddings,
    ];

    /// Maps a raw percentage onto its page bucket.
    ///
    /// Values above 100 land on the terminal page.
    #[must_use]
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0..=19 => Self::UploadSelect,
            20..=39 => Self::Prerequisites,
            40..=59 => Self::KnowledgeMap,
            60..=79 => Self::Attention,
            80..=99 => Self::FeedForward,
            _ => Self::Embeddings,
        }
    }

    /// Lowest progress value that displays this page.
    #[must_use]
    pub fn threshold(self) -> Progress {
        Progress::from_steps(self.index())
    }

    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::UploadSelect => 0,
            Self::Prerequisites => 1,
            Self::KnowledgeMap => 2,
            Self::Attention => 3,
            Self::FeedForward => 4,
            Self::Embeddings => 5,
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::UploadSelect => Some(Self::Prerequisites),
            Self::Prerequisites => Some(Self::KnowledgeMap),
            Self::KnowledgeMap => Some(Self::Attention),
            Self::Attention => Some(Self::FeedForward),
            Self::FeedForward => Some(Self::Embeddings),
            Self::Embeddings => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    #[must_use]
    pub fn is_content(self) -> bool {
        !matches!(self, Self::UploadSelect)
    }

    /// Short label used by the footer progress segments.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UploadSelect => "Upload",
            Self::Prerequisites => "Prerequisites",
            Self::KnowledgeMap => "Knowledge Map",
            Self::Attention => "Attention",
            Self::FeedForward => "FNNs",
            Self::Embeddings => "Embeddings",
        }
    }

    /// Stable identifier for DOM ids and log fields.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::UploadSelect => "upload",
            Self::Prerequisites => "prerequisites",
            Self::KnowledgeMap => "knowledge-map",
            Self::Attention => "attention",
            Self::FeedForward => "feed-forward",
            Self::Embeddings => "embeddings",
        }
    }
}

impl fmt::Display for LessonPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_match_fixed_mapping() {
        let expected = [
            (0, LessonPage::UploadSelect),
            (19, LessonPage::UploadSelect),
            (20, LessonPage::Prerequisites),
            (39, LessonPage::Prerequisites),
            (40, LessonPage::KnowledgeMap),
            (59, LessonPage::KnowledgeMap),
            (60, LessonPage::Attention),
            (79, LessonPage::Attention),
            (80, LessonPage::FeedForward),
            (99, LessonPage::FeedForward),
            (100, LessonPage::Embeddings),
        ];
        for (percent, page) in expected {
            assert_eq!(LessonPage::for_percent(percent), page, "percent {percent}");
        }
    }

    #[test]
    fn buckets_are_non_decreasing() {
        let mut previous = LessonPage::for_percent(0);
        for percent in 1..=100 {
            let page = LessonPage::for_percent(percent);
            assert!(page >= previous, "regressed at {percent}");
            previous = page;
        }
    }

    #[test]
    fn threshold_round_trips_through_bucket() {
        for page in LessonPage::ALL {
            assert_eq!(LessonPage::for_percent(page.threshold().value()), page);
        }
    }

    #[test]
    fn only_embeddings_is_terminal() {
        let terminal: Vec<_> = LessonPage::ALL
            .into_iter()
            .filter(|page| page.is_terminal())
            .collect();
        assert_eq!(terminal, vec![LessonPage::Embeddings]);
    }
}
