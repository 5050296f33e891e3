//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem, archives, and external
//! processes. This module is the only place where side effects occur.

pub mod catalog;
pub mod command;
pub mod filesystem;
pub mod log;
pub mod stager;
