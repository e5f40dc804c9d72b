//! # Storage Layer
//!
//! The persisted state is a two-key namespace:
//!
//! ```text
//! notes: [ { id, text, category, pinned }, ... ]   insertion order
//! theme: "dark" | "light"
//! ```
//!
//! [`backend::StorageBackend`] abstracts the raw I/O for those keys;
//! [`note_store::NoteStore`] layers the business rules on top: every
//! operation is a read-modify-write cycle over the full collection, and
//! mutations are keyed by note id. The persisted order is insertion order,
//! always; pinned-first sorting happens at render time only (see
//! [`crate::index`]).
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend, `notes.json` and
//!   `theme.json` in the data directory, atomic tmp+rename writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O,
//!   with a write-error simulation switch.
//!
//! ## Consistency
//!
//! A missing key is a defined state (empty collection, light theme), not an
//! error. There is no schema versioning and no reconciliation pass; the two
//! files are each rewritten whole on every change, so the worst a crash can
//! leave behind is the previous consistent state.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use note_store::NoteStore;
