//! Error types for the projectboard core.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type returned by every service operation; the
//! consuming transport layer is responsible for translating variants into
//! protocol-level responses (e.g. HTTP status codes). The core itself never
//! swallows an invariant violation - it is surfaced immediately with a
//! descriptive reason and no retry is attempted.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A referenced entity (team, project, meeting, task, link) does not
    /// exist.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// The operation violates a business invariant: a terminal meeting state,
    /// an already-completed task, a duplicate link or assignment, a semester
    /// exclusivity conflict, or a guarded status transition.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal error indicating unexpected behavior and possible bugs.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}
