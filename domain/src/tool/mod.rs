//! Tool domain module
//!
//! Describes the external inspection binaries the launcher knows how to
//! drive (metadata readers, hex dumpers, string extractors, firmware
//! analyzers).
//!
//! ```text
//! ┌──────────────┐    lookup     ┌──────────────┐
//! │ ToolRegistry │──────────────▶│ ToolEntry    │
//! │ (injected)   │  "xxd"        │ cmd/package  │
//! └──────────────┘               └──────────────┘
//! ```
//!
//! The registry is plain data. It is built once at startup (built-in tools
//! merged with config-defined tools) and handed to every adapter that needs
//! it as an explicit `Arc<ToolRegistry>`. Nothing reads it from a global.

pub mod entities;
pub mod registry;

pub use entities::ToolEntry;
pub use registry::ToolRegistry;
