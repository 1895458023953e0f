//! Serialization of fitted transformer parameters.
//!
//! Learned parameters are plain data (strings, numbers, maps) and are stored
//! with `bincode`. The same encoding is used for single units, the whole
//! pipeline and the classifier, so a saved artifact restores bit-identically.
//!
//! Params never hold a [`Table`](crate::table::Table): a unit keeps only what
//! it learned from the reference table (group mean ages, the mean fare, bin
//! edges, category lists) and column names, and rebuilds its output columns
//! from those at transform time. Restoring runs each unit's `from_params`
//! checks, so a damaged artifact fails to load instead of failing mid-transform.

use std::error::Error;

/// A trait for parameter representations that can be serialized to and from bytes.
///
/// Implementors should contain only plain data, never references into tables.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}
