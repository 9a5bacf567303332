#![deny(missing_docs)]

//! # grove-artifact — Latest-Artifact Resolution
//!
//! Core library for the grove stack. An external generation job writes
//! timestamped artifacts (a rendered image, a JSON recommendation
//! document, a 3D mesh) into shared directories over time. This crate
//! answers one question per request: *what is the newest artifact of a
//! given kind, and what are its bytes?*
//!
//! ## Design Principles
//!
//! 1. **The filesystem is the source of truth.** Directory contents are
//!    re-listed on every resolution; nothing is cached across calls and
//!    there is no in-process index to invalidate.
//!
//! 2. **Selection is a pure fold.** [`select_latest`] keeps the entry
//!    with strictly greatest modification time; exact ties keep the
//!    first-enumerated entry, so the result is deterministic for a given
//!    listing order.
//!
//! 3. **Races surface, they don't corrupt.** The generator may be
//!    mid-write when a resolution reads its output. Empty files and
//!    undecodable JSON surface as [`ArtifactError::Malformed`] — a
//!    reportable, retryable condition — never as a successful response
//!    carrying garbage. Writers wanting stronger guarantees must write
//!    to a temporary name and rename atomically; that protocol is a
//!    precondition on the writer, not enforced here.
//!
//! 4. **No `unwrap()` outside tests.** All fallible paths return
//!    [`ArtifactError`] via `thiserror`.

pub mod entry;
pub mod error;
pub mod kind;
pub mod reader;
pub mod store;

pub use entry::{select_latest, DirectoryEntry};
pub use error::ArtifactError;
pub use kind::ArtifactKind;
pub use reader::{read_artifact, resolve_latest, ArtifactPayload, ResolvedArtifact};
pub use store::{ArtifactStore, FsArtifactStore};
