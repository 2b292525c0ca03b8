//! Identifier newtypes.

mod id_macro;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a collection document.
///
/// Assigned by the store on insert and immutable afterwards; nothing in
/// this codebase ever rewrites one. The string content is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

id_macro::impl_id!(DocumentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = DocumentId::new();
        let b = DocumentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_string() {
        let id = DocumentId::from_str("student-42");
        assert_eq!(id.inner(), "student-42");
        assert_eq!(id.to_string(), "student-42");
        assert_eq!(DocumentId::from_string(id.clone().into_inner()), id);
    }
}
