//! ID generator port for producing run identifiers.

/// Generates unique identifiers.
///
/// Each report section carries a run id so that sections appended by
/// concurrent invocations can be told apart.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
