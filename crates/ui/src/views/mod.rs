mod footer;
mod lesson;
mod state;
mod upload;
mod walkthrough;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use footer::ProgressFooter;
pub use lesson::LessonPageView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use upload::UploadPage;
pub use walkthrough::WalkthroughView;
