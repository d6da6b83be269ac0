//! # Lexicat Architecture
//!
//! Lexicat is a **UI-agnostic vocabulary library**. The interactive menu is
//! a client of the library, not the other way around, and everything from
//! the API facade inward works without a terminal.
//!
//! ## Layers
//!
//! ```text
//! CLI layer (main.rs + args.rs)
//!   - Argument parsing, the numbered menu loop, prompts, colored output.
//!   - The ONLY place that touches stdin/stdout/stderr and exit codes.
//!            |
//!            v
//! API facade (api.rs)
//!   - LexicatApi: one method per operation, dispatch only.
//!            |
//!            v
//! Command layer (commands/*.rs)
//!   - Pure business logic returning structured CmdResult values.
//!   - No console assumptions whatsoever.
//!            |
//!            v
//! Containers (term.rs, term_list.rs, category.rs, store.rs)
//!   - Term: owned text value, byte-wise ordering, 64-char read limit.
//!   - TermList: doubly linked list with sorted insertion.
//!   - Category: a name plus its sorted set of unique words.
//!   - CategoryStore: growable array, unique by name, explicit
//!     double-on-full / halve-on-low-occupancy capacity policy.
//! ```
//!
//! Alongside the stack, `textfile.rs` owns the flat persistence format
//! (`#category` boundary lines followed by one word per line) and
//! `config.rs` the JSON display configuration.
//!
//! ## Error model
//!
//! Faults that a caller can guard against — an index past the end, taking
//! the front of an empty list — are `LexicatError` values. Not-found
//! conditions are plain booleans so call sites branch instead of matching
//! errors. Violations of the store's capacity invariant are bugs and
//! assert, never surface as values.
//!
//! ## Testing
//!
//! Each layer tests itself in `#[cfg(test)]` modules — the commands carry
//! the bulk of it, driven against in-memory stores. Scripted end-to-end
//! menu sessions live in `tests/`.

pub mod api;
pub mod category;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;
pub mod term;
pub mod term_list;
pub mod textfile;
