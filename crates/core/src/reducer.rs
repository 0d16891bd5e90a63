//! Event-driven front door to [`LessonSession`].
//!
//! UI callbacks never touch the session directly. They translate user input
//! into a [`LessonEvent`], run it through [`reduce`], and carry out whatever
//! [`LessonEffect`] comes back (timers, alerts). `reduce` is pure, so every
//! transition can be tested without a UI.

use chrono::{DateTime, Utc};

use crate::model::{
    AnswerOutcome, ArtifactRef, LessonPlan, LessonSession, UploadedFile, ValidationError,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonEvent {
    FileChosen {
        file: UploadedFile,
        reference: ArtifactRef,
    },
    TitleSelected {
        title: String,
        reference: Option<ArtifactRef>,
    },
    AnswerChanged(String),
    SubmitArtifact,
    ProcessingFinished,
    Advance,
    SubmitAnswer {
        answered_at: DateTime<Utc>,
    },
    /// Ends the highlight of answer number `answer` (see `LessonSession::answer_count`).
    AcknowledgementElapsed { answer: usize },
}

/// Follow-up work requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonEffect {
    /// Wait out the simulated upload, then send `ProcessingFinished`.
    ScheduleProcessing,
    /// Show the answer highlight, then send `AcknowledgementElapsed` for the
    /// same answer.
    ScheduleAcknowledgement { outcome: AnswerOutcome, answer: usize },
    /// Block the user with a message; the session did not change.
    Alert(ValidationError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    pub session: LessonSession,
    pub effect: Option<LessonEffect>,
}

impl Update {
    fn quiet(session: LessonSession) -> Self {
        Self {
            session,
            effect: None,
        }
    }
}

#[must_use]
pub fn reduce(plan: &LessonPlan, mut session: LessonSession, event: LessonEvent) -> Update {
    match event {
        LessonEvent::FileChosen { file, reference } => {
            session.select_file(file, reference);
            Update::quiet(session)
        }
        LessonEvent::TitleSelected { title, reference } => {
            session.select_title(title, reference);
            Update::quiet(session)
        }
        LessonEvent::AnswerChanged(text) => {
            session.set_answer_text(text);
            Update::quiet(session)
        }
        LessonEvent::SubmitArtifact => match session.submit_artifact() {
            Ok(()) => Update {
                session,
                effect: Some(LessonEffect::ScheduleProcessing),
            },
            Err(err) => Update {
                session,
                effect: Some(LessonEffect::Alert(err)),
            },
        },
        LessonEvent::ProcessingFinished => {
            session.finish_processing();
            Update::quiet(session)
        }
        LessonEvent::Advance => {
            session.advance();
            Update::quiet(session)
        }
        LessonEvent::SubmitAnswer { answered_at } => {
            let text = session.answer_text().to_owned();
            let effect = session
                .check_answer(plan, &text, answered_at)
                .map(|outcome| LessonEffect::ScheduleAcknowledgement {
                    outcome,
                    answer: session.answer_count(),
                });
            Update { session, effect }
        }
        LessonEvent::AcknowledgementElapsed { answer } => {
            session.dismiss_acknowledgement(answer);
            Update::quiet(session)
        }
    }
}
