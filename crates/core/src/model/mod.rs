mod artifact;
mod page;
mod plan;
mod progress;
mod question;
mod session;

pub use artifact::{Artifact, ArtifactRef, UploadedFile};
pub use page::LessonPage;
pub use plan::{LessonPlan, PageContent, VoiceCommand};
pub use progress::{Progress, ProgressError};
pub use question::{AnswerOutcome, Question};
pub use session::{AnswerRecord, AnswerSummary, LessonSession, ValidationError};
