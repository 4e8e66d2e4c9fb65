//! Identifier generation adapter.

use uuid::Uuid;

use crate::domain::ports::IdGenerator;

/// `IdGenerator` minting random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_distinct_uuids() {
        let generator = UuidIdGenerator;
        let ids: HashSet<String> = (0..64).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 64);
        for id in &ids {
            Uuid::parse_str(id).expect("generated id is a UUID");
        }
    }
}
