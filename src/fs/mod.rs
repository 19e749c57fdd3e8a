//! Filesystem utilities for soka-kit.
//!
//! Generated files are written atomically so an interrupted generator never
//! leaves a half-written source file behind.

pub mod atomic;

pub use atomic::{atomic_write_file, ensure_dir};
