//! Fixit - file FIXME comments as GitHub issues
//!
//! Fixit scans the files tracked by a git repository for `FIXME: <title>`
//! comments, followed by comment lines forming the body, and files each one
//! as an issue on the repository's GitHub remote. A local cache of filed
//! issues keeps repeated runs from filing the same issue twice.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `core`: FIXME extraction (pure, no I/O)
//! - `cache`: Persistent record of filed issues
//! - `reporter`: At-most-once submission through an issue tracker
//! - `tracker`: Issue tracker clients (GitHub)
//! - `scan`: Scan orchestration over tracked files
//! - `session`: Working tree, configuration and resolved reporting session
//! - `config`: Configuration file loading and parsing
//! - `credentials`: Tracker credential lookup
//! - `vcs`: Git access and remote identity parsing

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod credentials;
pub mod reporter;
pub mod scan;
pub mod session;
pub mod tracker;
pub mod vcs;
