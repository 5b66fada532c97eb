//! # Visadesk Architecture
//!
//! Visadesk is a **UI-agnostic back-office library** for a small visa
//! consultancy site, with a CLI console on top. The public site's
//! rendering layer is a separate consumer; everything it persists — visa
//! services, testimonials, hero images, about content, clients, the
//! credit/debit ledger, inbound contact messages, site settings and the
//! activity log — lives behind this crate.
//!
//! ## The Layer Cake
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, prompts on destructive │
//! │    operations. The ONLY place that knows about stdout/exit  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the collaborator ports   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic per entity, plus the cross-cutting   │
//! │    lifecycle engine, audit sink and backup envelope         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: one JSON file per collection       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, never writes to stdout and never exits the
//! process. The one sanctioned exception is stderr warnings when a
//! failure is deliberately swallowed (a corrupt collection file, a failed
//! activity-log write) — the operation must survive, but the operator
//! should hear about it.
//!
//! ## Failure Posture
//!
//! The console must stay usable with a damaged data directory: missing
//! files read as empty collections, corrupt files warn and read as empty,
//! and external collaborators (mail, AI, image bucket) fail soft into
//! messages rather than crashes. See `store` and `external` for details.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each entity and concern
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types and the lifecycle/identity traits
//! - [`lifecycle`]: The shared soft-delete engine
//! - [`audit`]: Activity-log sink (capped, failure-swallowing)
//! - [`external`]: Ports to the mail/AI/image collaborators
//! - [`error`]: Error types
//! - `main.rs`/`args.rs`/`print.rs`: the console binary (not part of the
//!   lib API)

pub mod api;
pub mod audit;
pub mod commands;
pub mod error;
pub mod external;
pub mod lifecycle;
pub mod model;
pub mod store;
