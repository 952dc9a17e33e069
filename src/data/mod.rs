// ABOUTME: Data loading and normalization module
// ABOUTME: Exports the document loader, map-key normalizer, and JSON pointer resolver

pub mod error;
pub mod loader;
pub mod normalize;
pub mod pointer;

pub use error::{DataError, PointerError};
pub use loader::{DataFormat, DataLoader};
pub use normalize::normalize_keys;
pub use pointer::resolve_pointer;
