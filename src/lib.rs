//! Projectboard core: university project-management backend logic.
//!
//! This crate implements the service layer of a curator/student project
//! management system: teams and their members, projects scoped to a
//! year/semester, team-to-project assignments, chained team meetings, and the
//! task ledger shared between meetings. It is consumed by a transport layer
//! (HTTP or otherwise) through plain function calls; no routing or wire
//! protocol lives here.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Service Layer** (`service/`) - Business logic: meeting chain
//!   management with task carry-forward, the project-team assignment engine,
//!   and entity lifecycle transitions
//! - **Data Layer** (`data/`) - Database repositories built on SeaORM,
//!   generic over the connection so they run equally inside transactions
//! - **Model Layer** (`model/`) - Domain models and per-operation parameter
//!   types (typed partial-update patches)
//! - **Error Layer** (`error/`) - Application error taxonomy
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Database connection, migrations, and tracing
//!   initialization

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
