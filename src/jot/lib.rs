//! # Jot Architecture
//!
//! Jot is a **UI-agnostic note-keeping library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli concerns live in main.rs + args.rs)         │
//! │  - Parses arguments, renders the themed list, prints        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display positions → note ids)         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait over the two persisted keys         │
//! │  - FsBackend (production), MemBackend (testing)             │
//! │  - NoteStore: the single owning repository                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted State
//!
//! Two keys in one durable namespace: `notes`, an insertion-ordered
//! sequence of `{ id, text, category, pinned }` records, and `theme`,
//! a `"light"`/`"dark"` flag. Pinned-first ordering is applied at render
//! time only and never written back.
//!
//! ## Key Principle: Mutate by Id, Display by Position
//!
//! Users type 1-based display positions; the API resolves each position to
//! a note id against a fresh listing and every mutation below that point is
//! keyed by id. Positions are never stored and never trusted across
//! operations, so batched or quick-fire commands cannot act on a stale
//! snapshot's offsets.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests over `MemBackend`.
//!    This is where the lion's share of testing lives.
//! 2. **Storage** (`store/`, `tests/fs_backend_test.rs`): backend contract
//!    tests, atomic-write artifacts, error propagation.
//! 3. **CLI** (`tests/cli_e2e.rs`): end-to-end runs of the binary against a
//!    temp data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types and normalization rules
//! - [`index`]: Render ordering and display positions
//! - [`theme`]: The light/dark preference
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod theme;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
