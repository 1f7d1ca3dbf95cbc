//! # taskboard-core
//!
//! Core types shared across the Taskboard crates:
//! - Entity structs for tasks and users
//! - The task status enum with exhaustive wire-value parsing
//! - Filter, sort, and pagination types for task listings
//! - ID prefix constants and generation
//! - Transport-facing response records

pub mod entities;
pub mod enums;
pub mod filter;
pub mod ids;
pub mod responses;
