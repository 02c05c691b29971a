//! Core workbench primitives for docket.
//!
//! This crate owns the conversation session with its reply reveal, the
//! document registry and requirement board, draft generation, and the
//! simulated transfer engine used by front-end shells.

pub mod badge;
pub mod chat;
pub mod draft;
pub mod error;
pub mod registry;
pub mod seed;
pub mod transfer;
pub mod types;
mod workbench;

pub use chat::{ChatSession, RevealHandle, RevealStream};
pub use draft::DraftRequest;
pub use error::DocketCoreError;
/// Session-owned containers.
pub use registry::{DocumentRegistry, DocumentStats, RequirementBoard, RequirementStats};
pub use transfer::TransferSimulator;
pub use workbench::Workbench;
