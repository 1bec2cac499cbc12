//! Identifier field state for record forms.
//!
//! The suggestion flows one way: it is recomputed from the latest list of
//! identifiers and shown as the field's default. Anything the user types is
//! kept locally and never feeds back into the allocator.

use crate::ids::IdScheme;

/// The identifier input of a create/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct IdField {
    scheme: IdScheme,
    suggested: String,
    edited: Option<String>,
}

impl IdField {
    /// Build the field from the identifiers currently in the store.
    pub fn from_ids<I, S>(scheme: IdScheme, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            scheme,
            suggested: scheme.next(ids),
            edited: None,
        }
    }

    /// Recompute the suggestion after a list refresh.
    ///
    /// A value the user has typed is left in place.
    pub fn refresh<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.suggested = self.scheme.next(ids);
    }

    /// Record a user edit.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.edited = Some(value.into());
    }

    /// Load an existing record's identifier for editing.
    pub fn load_existing(&mut self, id: impl Into<String>) {
        self.edited = Some(id.into());
    }

    /// Current value: the user's text if any, otherwise the suggestion.
    pub fn value(&self) -> &str {
        self.edited.as_deref().unwrap_or(&self.suggested)
    }

    pub fn suggested(&self) -> &str {
        &self.suggested
    }

    pub fn is_overridden(&self) -> bool {
        self.edited.is_some()
    }

    /// Take the value to submit and clear any user edit.
    ///
    /// The field shows the stale suggestion until the next [`IdField::refresh`].
    pub fn take_for_submit(&mut self) -> String {
        self.edited
            .take()
            .unwrap_or_else(|| self.suggested.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EntityKind;

    #[test]
    fn test_suggestion_and_override() {
        let mut field = IdField::from_ids(EntityKind::Nurse.scheme(), ["N001", "N002"]);
        assert_eq!(field.value(), "N003");
        assert!(!field.is_overridden());

        field.edit("N050");
        assert_eq!(field.value(), "N050");
        assert_eq!(field.suggested(), "N003");
    }

    #[test]
    fn test_refresh_keeps_user_edit() {
        let mut field = IdField::from_ids(EntityKind::Patient.scheme(), ["P001"]);
        field.edit("P100");
        field.refresh(["P001", "P002"]);
        assert_eq!(field.suggested(), "P003");
        assert_eq!(field.value(), "P100");
    }

    #[test]
    fn test_submit_then_refresh() {
        let mut field = IdField::from_ids(EntityKind::Medicine.scheme(), ["M001"]);
        let submitted = field.take_for_submit();
        assert_eq!(submitted, "M002");

        field.refresh(["M001", "M002"]);
        assert_eq!(field.value(), "M003");
    }

    #[test]
    fn test_load_existing() {
        let mut field = IdField::from_ids(EntityKind::Department.scheme(), ["D001", "D002"]);
        field.load_existing("D001");
        assert_eq!(field.value(), "D001");
        assert_eq!(field.take_for_submit(), "D001");
        assert_eq!(field.value(), "D003");
    }

    #[test]
    fn test_stale_suggestion_can_repeat() {
        // Two submissions before a refresh see the same suggestion
        let mut field = IdField::from_ids(EntityKind::Payment.scheme(), ["PI001"]);
        assert_eq!(field.take_for_submit(), "PI002");
        assert_eq!(field.take_for_submit(), "PI002");
    }
}
