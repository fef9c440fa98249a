//! State management module
//!
//! This module handles all application state, including:
//! - Shared data structures (data.rs)
//! - The inspection view state machine (inspection.rs)

pub mod data;
pub mod inspection;
