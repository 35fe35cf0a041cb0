//! End-to-end media relocation pipeline.
//!
//! Wires the extraction crates together: [`transform`] takes submitted
//! text, downloads every attachment through a [`Fetcher`], stores it via an
//! [`amber_storage::Relocator`], and returns the text with all media
//! references rewritten to their permanent form.

pub mod error;
mod fetch;
mod transform;

pub use fetch::{Fetched, Fetcher, HttpFetcher};
pub use transform::transform;
