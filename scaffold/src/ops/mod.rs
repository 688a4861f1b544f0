//! Core operations.
//!
//! This module contains the business logic behind the CLI,
//! separated from argument parsing and output rendering.

pub mod scaffold;

pub use scaffold::scaffold;
