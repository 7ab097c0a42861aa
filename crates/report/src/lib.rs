//! Report collection for reporter
//!
//! A [`Report`] accumulates named JSON values in insertion order and
//! persists them through a shared [`Backend`](reporter_core::Backend) under
//! its [`ReportId`](reporter_core::ReportId).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod pair;
pub mod report;
mod value;

pub use builder::ReportBuilder;
pub use pair::split_pair;
pub use report::Report;
