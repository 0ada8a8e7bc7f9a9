pub mod formatter;
pub mod matchers;
pub mod parser;
pub mod service;

pub use crate::domain::model::{PostcodeIssue, UpdateMethod};
pub use crate::domain::ports::{PostcodeRangeApi, Translator};
pub use crate::utils::error::Result;
