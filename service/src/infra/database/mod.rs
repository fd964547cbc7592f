//! [`Database`]-related implementations.

pub mod memory;

pub use self::memory::Memory;

/// Database operation.
pub use common::Handler as Database;
