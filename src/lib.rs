//! This file is the root of the `guidorder` Rust crate.
//!
//! `guidorder` orders 128-bit identifiers that use the mixed-endian
//! `a-b-c-d..k` layout by their canonical (big-endian wire) byte order. It
//! offers several interchangeable comparison strategies, from a plain
//! field-by-field scan to SSE2/SSSE3/AVX2 and NEON kernels, all of which must
//! agree on every pair of identifiers.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library.
//! 2.  Re-exporting the types most callers need.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod capability;
pub mod comparator;
pub mod compare;
pub mod config;
pub mod error;
pub mod layout;
pub mod selftest;
pub mod utils;

mod traits;

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use comparator::Comparator;
pub use compare::Strategy;
pub use config::GuidOrderConfig;
pub use error::GuidOrderError;
pub use layout::{
    identifier_from_external, identifier_from_fields, ExternalIdentifier, Identifier,
    IdentifierFields, MixedEndianBytes, U128Word, IDENTIFIER_LEN,
};
pub use traits::{differing_order, HasUnsigned};
