use scholora_core::model::{LessonPage, Progress};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterSegmentVm {
    pub label: &'static str,
    pub lit: bool,
}

/// One segment per content page; segment `i` lights up once progress
/// reaches that page's threshold.
#[must_use]
pub fn map_footer_segments(progress: Progress) -> Vec<FooterSegmentVm> {
    LessonPage::CONTENT
        .iter()
        .enumerate()
        .map(|(index, page)| FooterSegmentVm {
            label: page.label(),
            lit: progress.segment_lit(index),
        })
        .collect()
}
