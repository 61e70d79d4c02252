/// Small shared value types.
pub(crate) mod core;
/// Error taxonomy.
pub(crate) mod error;
