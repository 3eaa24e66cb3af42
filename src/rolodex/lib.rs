//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic phone directory library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs)                                        │
//! │  - Prompts, reads lines, formats output, colors messages    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session's Directory and Cursor                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: validate, mutate, move the cursor   │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store.rs, cursor.rs, phone.rs, name.rs, order.rs)    │
//! │  - The ordered record sequence and its invariants           │
//! │  - Validation and canonicalization primitives               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Ordering Contract
//!
//! Records are kept sorted at all times by a case-insensitive
//! (last name, first name, phone number) key. The sort position is found
//! by a left-to-right scan whose exact equal-key placement is part of the
//! contract; see store.rs for details. Phone numbers are unique across the
//! directory, so the full key identifies at most one record.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, core), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a browser app, or any
//! other UI.
//!
//! ## Testing Strategy
//!
//! The architecture enables focused testing at each layer:
//!
//! 1. **Core** (`store.rs` and the primitives): Thorough unit tests of the
//!    ordering scan, uniqueness, and validation. This is where the lion's
//!    share of testing lives.
//!
//! 2. **Commands** (`commands/*.rs`): Unit tests of each operation's
//!    effect on the store and the cursor, including the failure paths.
//!
//! 3. **API** (`api.rs`): Tests verifying correct dispatch—not the logic
//!    itself.
//!
//! 4. **CLI** (`main.rs`): Scripted end-to-end sessions in `tests/`,
//!    driving the binary over stdin and asserting on its output.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The ordered, phone-unique record sequence
//! - [`cursor`]: The current-record selection
//! - [`model`]: Core data types (`Record`, `RecordField`)
//! - [`phone`]: Phone number validation and canonical formatting
//! - [`name`]: Name normalization
//! - [`order`]: The sort key
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod cursor;
pub mod error;
pub mod model;
pub mod name;
pub mod order;
pub mod phone;
pub mod store;
