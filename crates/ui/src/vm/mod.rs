mod footer_vm;
mod lesson_vm;
mod upload_vm;

pub use footer_vm::{FooterSegmentVm, map_footer_segments};
pub use lesson_vm::{LessonIntent, LessonPageVm, map_lesson_page};
pub use upload_vm::{UploadVm, map_upload};
