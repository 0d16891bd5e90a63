#![forbid(unsafe_code)]

pub mod artifacts;
pub mod catalog;
pub mod repository;

pub use repository::{Storage, StorageError};
