//! Server application core modules.
//!
//! This module contains all server-side functionality for the Holocron application,
//! including HTTP routing, database operations, catalog and favorite management, and
//! database seeding. It provides the complete backend for browsing the Star Wars
//! catalog and managing per-user favorites.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
