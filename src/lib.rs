//! Smart archive front end: recognizes what a path is, plans compress or
//! decompress, and drives the system's archiving tools through argument
//! vectors, never through a shell.

pub mod cli;
pub mod command;
pub mod conflict;
pub mod error;
pub mod format;
pub mod interactive;
pub mod ops;
pub mod paths;
pub mod plan;
pub mod runner;
