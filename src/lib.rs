//! ipsort - sort, filter and deduplicate proxy IP lists.
//!
//! This crate reads `address[:suffix]` lines, keeps the ones that parse as
//! IP addresses, orders them by canonical bytes, optionally drops an
//! exclusion list, refuses lists with repeated IPv4 addresses, and writes
//! either the plain list or a proxy health-check shell script.
//!
//! # Quick Start
//!
//! ```ignore
//! use ipsort::{run, Options, OutputFormat};
//!
//! let options = Options::new("proxies.txt", OutputFormat::Plain, "sorted.txt")
//!     .with_exclude("dead.txt");
//! let summary = run(&options)?;
//! println!("wrote {} addresses", summary.written);
//! ```
//!
//! # Input Format
//!
//! - One entry per line; everything from the first `:` on is ignored
//! - `[v6-address]:suffix` for IPv6 entries
//! - Unparsable lines are skipped silently
//! - Gzip-compressed files are detected and decompressed
//!
//! # Ordering
//!
//! Addresses compare by canonical bytes, most significant first. IPv4-mapped
//! IPv6 addresses are treated as IPv4, and all IPv4 addresses sort before
//! all IPv6 addresses.
//!
//! # Duplicates
//!
//! A repeated IPv4 address aborts the run before any output is written.
//! Repeated IPv6 addresses are not detected.

mod address;
mod error;
mod format;
mod options;

pub mod duplicate;
pub mod exclude;
pub mod loader;
pub mod pipeline;
pub mod sort;
pub mod writer;

// Re-export core types
pub use address::Address;
pub use error::{Error, Result};
pub use format::OutputFormat;
pub use options::Options;

// Re-export pipeline stages
pub use duplicate::find_duplicate;
pub use exclude::{exclude, ExclusionSet};
pub use loader::{read_addresses, AddressLoader};
pub use pipeline::{prepare, run, RunSummary};
pub use sort::{is_sorted, sort_addresses};
pub use writer::{render_script, AddressWriter};
