//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Authentication test helpers
//! - An in-process test server

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;
pub mod server;

pub use auth_helpers::*;
pub use database::*;
pub use server::*;
