//! Storage backends and permanent relocation of media objects.

pub mod backend;
pub mod error;
mod path;
mod relocate;

pub use crate::backend::StorageBackend;
pub use crate::path::validate as validate_path;
pub use crate::relocate::{AddressStyle, Relocator, StoredAsset};
use std::sync::Arc;

pub type BackendHandle = Arc<dyn StorageBackend + Send + Sync>;
