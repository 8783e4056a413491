//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod change_set;
mod symbol_table;

pub use change_set::{
    AssetAction, ChangeSet, ChangeSetResolver, PlannedAsset, RegenerateReason,
};
pub use symbol_table::{SymbolEntry, SymbolTable};
