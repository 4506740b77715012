//! Shared utilities for the Quill workspace.

pub mod logging;

pub use logging::{init_logging, try_init_test_logging, LogFormat};
