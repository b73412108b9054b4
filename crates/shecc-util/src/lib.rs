//! Core utilities shared by every crate in the compiler workspace.
//!
//! This crate carries no compiler-specific semantics of its own: typed
//! arena indices ([`index_vec`]), string interning ([`symbol`]), source
//! spans ([`span`]), diagnostics ([`diagnostic`]), the fixed capacities
//! named in the external interface ([`limits`]), the point-at-source
//! fatal-error contract ([`source`]), the name→entry chain hashmap
//! ([`hashmap`]), and the back-end's output buffer shapes ([`elf`]).

pub mod diagnostic;
pub mod elf;
pub mod error;
pub mod hashmap;
pub mod index_vec;
pub mod limits;
pub mod source;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{CoreError, CoreResult};
pub use hashmap::Hashmap;
pub use index_vec::{Idx, IndexVec};
pub use span::Span;
pub use symbol::Symbol;

// Re-export commonly used hash collections used for auxiliary (non-contract)
// maps throughout the workspace — anywhere external ordering guarantees
// matter (the hashmap's shadowing contract, §4.1) a dedicated type is used
// instead of these.
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
