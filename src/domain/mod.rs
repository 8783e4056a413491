//! Domain Layer
//!
//! The core of assetbake - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Asset, FingerprintManifest, GeneratedSource)
//! - `value_objects/` - Immutable value types (NormalizedName, ContentHash, OutputLayout)
//! - `services/` - Domain services (ChangeSetResolver, SymbolTable)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
