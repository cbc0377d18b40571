// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for the nextvfs crate.
//!
//! This module defines [`NextVfsError`], the crate-wide error enum.
//!
//! # Error Categories
//!
//! - **VFS errors**: A virtual-filesystem read failed (missing file,
//!   `read_dir` on a non-directory)
//! - **Config parse errors**: A config source could not be parsed as an
//!   ECMAScript module
//! - **Extraction errors**: The exported object literal could not be
//!   recovered from a config source
//! - **Cache errors**: Route-cache operation failures
//!
//! Note that *absence* is never an error in this crate: the route
//! resolvers return `Option` and the config loaders return empty
//! snapshots when the project simply does not have the probed file.

use thiserror::Error;

/// The main error type for nextvfs operations.
#[derive(Error, Debug)]
pub enum NextVfsError {
    /// File I/O error (real-disk snapshotting, host-side reads).
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A virtual-filesystem operation failed.
    #[error("VFS error: {0}")]
    VfsError(String),

    /// File content was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// Config source could not be parsed as an ECMAScript module.
    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    /// The exported object literal could not be extracted.
    #[error("Extraction error: {0}")]
    ExtractionError(String),

    /// Cache operation failed.
    #[error("Cache error: {0}")]
    CacheError(String),
}

/// Convenience type alias for Results with [`NextVfsError`].
pub type Result<T> = std::result::Result<T, NextVfsError>;
