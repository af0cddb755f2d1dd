//! # Surat Architecture
//!
//! Surat is a **UI-agnostic correspondence-register library**: incoming and
//! outgoing letters logged to flat JSON documents, with duplicate-number
//! rejection and an automatic/manual numbering policy. The CLI is one
//! client of the library, not the library itself.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders tables, prints messages        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (row numbers, generation dates)        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure register logic, one module per operation            │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond the store it is handed         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DocumentStore trait over named JSON documents   │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency model
//!
//! Every mutation is a synchronous read-modify-write of one whole JSON
//! document. There is no locking and no cross-document transaction: the
//! numbering counters and the registers are independent documents, and two
//! overlapping writers race with last-write-wins on the whole document.
//! See the module docs in [`store`], [`letters`] and [`numbering`] for
//! the edges this leaves open.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Register logic for each operation
//! - [`store`]: Document-store abstraction and implementations
//! - [`model`]: Core data types (`Letter`, `Tag`, `Counters`)
//! - [`letters`]: Ordered letter collections over a store
//! - [`numbering`]: Counter-based number generation and the Auto/Manual mode
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod letters;
pub mod model;
pub mod numbering;
pub mod store;
