//! # Recstore Architecture
//!
//! Recstore keeps a collection of records in one JSON file and runs exactly
//! one operation per process: `add`, `list`, `findById` or `remove`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, main.rs)                               │
//! │  - Flags → flat Arguments map, logging, exit codes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, request.rs)                             │
//! │  - Validates arguments into a typed Request                 │
//! │  - Opens the store and dispatches on the Action             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One business rule per operation                          │
//! │  - Writes to a caller-supplied sink, returns an Outcome     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: decode/encode the collection                │
//! │  - StorageBackend: FileBackend (production), MemBackend     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every invocation is stateless apart from the backing file: the collection
//! is loaded fresh, changed in memory and, for `add` and `remove`, written
//! back whole. There is no locking, so only one invocation should work on a
//! given file at a time.
//!
//! ## Module Overview
//!
//! - [`api`]: validation + dispatch entry point
//! - [`request`]: `Arguments`, `Operation`, `Action`, `Request`
//! - [`commands`]: the four operations
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Record` and `Collection`
//! - [`config`]: format policy and write mode
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod request;
pub mod store;
