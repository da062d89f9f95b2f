//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each table. Repositories use SeaORM entity models internally and
//! return them to the service layer, which converts them to domain models.
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so the same
//! code runs against the pooled connection or inside a transaction opened by a
//! service.

pub mod meeting;
pub mod meeting_task;
pub mod milestone;
pub mod project;
pub mod project_team;
pub mod student;
pub mod task;
pub mod team;
pub mod team_member;

#[cfg(test)]
mod test;
