//! Embassy tasks

mod demo;

pub use demo::demo_task;
