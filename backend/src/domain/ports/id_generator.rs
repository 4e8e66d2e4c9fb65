//! Port for minting record identifiers.

/// Source of fresh, unique record identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier not used by any existing record.
    fn generate(&self) -> String;
}
