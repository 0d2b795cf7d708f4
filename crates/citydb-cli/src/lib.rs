//! citydb-cli
//! ==========
//!
//! Command-line interface for the `citydb-core` city database.
//!
//! This crate primarily provides a binary (`citydb`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! citydb --help
//! citydb --db demo.sqlite3 seed
//! citydb --db demo.sqlite3 stats
//! citydb --db demo.sqlite3 city lyo
//! citydb --db demo.sqlite3 list --active --exclude-online
//! ```
//!
//! For programmatic access to the query handler and DTOs, use the
//! [`citydb-core`] crate directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
