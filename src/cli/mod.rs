//! CLI infrastructure for the adversarial search toolkit
//!
//! This module provides the command-line interface for playing matches
//! between agents and for querying the engine about a single position.

pub mod commands;
pub mod output;
