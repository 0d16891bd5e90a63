#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod reducer;
pub mod time;

pub use error::Error;
pub use reducer::{LessonEffect, LessonEvent, Update, reduce};
pub use time::Clock;
