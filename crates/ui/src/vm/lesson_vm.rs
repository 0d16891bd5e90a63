use scholora_core::model::{
    AnswerOutcome, LessonPage, LessonPlan, LessonSession, VoiceCommand,
};

use super::footer_vm::{FooterSegmentVm, map_footer_segments};

/// Everything a view can ask of the walkthrough.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    PickFile,
    SelectTitle(String),
    SubmitArtifact,
    DismissAlert,
    AnswerChanged(String),
    SubmitAnswer,
    Continue,
    Voice(VoiceCommand),
    OpenResource(String),
    PlaybackFailed(String),
}

/// Display snapshot of a content page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonPageVm {
    pub page: LessonPage,
    pub paper_title: String,
    pub authors: String,
    pub artifact_name: Option<String>,
    pub heading: String,
    pub summary: Option<String>,
    pub resources: Vec<String>,
    pub embed_url: Option<String>,
    pub video: Option<String>,
    pub question: Option<String>,
    pub answer_text: String,
    pub acknowledgement: Option<AnswerOutcome>,
    pub voice: Option<VoiceCommand>,
    pub can_continue: bool,
    pub closing_summary: Option<String>,
    pub footer: Vec<FooterSegmentVm>,
}

impl LessonPageVm {
    #[must_use]
    pub fn question_class(&self) -> &'static str {
        match self.acknowledgement {
            Some(AnswerOutcome::Correct) => "question-box ack-correct",
            Some(AnswerOutcome::Incorrect) => "question-box ack-incorrect",
            None => "question-box",
        }
    }
}

#[must_use]
pub fn map_lesson_page(plan: &LessonPlan, session: &LessonSession) -> LessonPageVm {
    let page = session.page();
    let content = plan.content(page);

    let closing_summary = page.is_terminal().then(|| {
        let summary = session.summary();
        format!(
            "You answered {} of {} questions correctly.",
            summary.correct, summary.answered
        )
    });

    LessonPageVm {
        page,
        paper_title: plan.paper_title().to_owned(),
        authors: plan.authors().to_owned(),
        artifact_name: session.artifact().map(|a| a.display_name().to_owned()),
        heading: content
            .map_or_else(|| page.label().to_owned(), |c| c.heading().to_owned()),
        summary: content.and_then(|c| c.summary()).map(str::to_owned),
        resources: content.map(|c| c.resources().to_vec()).unwrap_or_default(),
        embed_url: content.and_then(|c| c.embed_url()).map(str::to_owned),
        video: content.and_then(|c| c.video()).map(str::to_owned),
        question: content
            .and_then(|c| c.question())
            .map(|q| q.prompt().to_owned()),
        answer_text: session.answer_text().to_owned(),
        acknowledgement: session.acknowledgement(),
        voice: content.and_then(|c| c.voice()),
        can_continue: page.is_content() && !page.is_terminal(),
        closing_summary,
        footer: map_footer_segments(session.progress()),
    }
}
