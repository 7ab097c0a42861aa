//! Integration Tests
//!
//! End-to-end report behavior through the public `reporter` facade:
//! - Lifecycle: create, accumulate, save, reload
//! - File layout: names, raw content, directory creation
//! - Backends: file vs in-memory, custom and partial backends

#[path = "../common/mod.rs"]
mod common;

mod backends;
mod file_layout;
mod lifecycle;
