//! Form Field Components
//!
//! Presentational wrappers pairing a label, an input primitive, and the
//! validation messages for one field. Validation itself happens elsewhere;
//! these components only display what the caller hands them.

pub mod checkbox_field;
pub mod error_list;
pub mod field;
pub mod textarea_field;

pub use checkbox_field::{CheckboxField, checkbox_field};
pub use error_list::ErrorList;
pub use field::Field;
pub use textarea_field::TextareaField;

use gpui::SharedString;

/// Validation messages for one field, in display order.
///
/// Entries may be absent; whole lists may be absent. Rendering treats empty
/// strings like absent entries.
pub type ListOfErrors = Vec<Option<SharedString>>;

/// Drop absent and empty entries, preserving order
pub(crate) fn visible_errors(errors: Option<&ListOfErrors>) -> Vec<SharedString> {
    errors
        .map(|errors| {
            errors
                .iter()
                .flatten()
                .filter(|e| !e.is_empty())
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(entries: &[Option<&str>]) -> ListOfErrors {
        entries
            .iter()
            .map(|e| e.map(|e| SharedString::from(e.to_string())))
            .collect()
    }

    fn as_strs(errors: &[SharedString]) -> Vec<&str> {
        errors.iter().map(|e| e.as_ref()).collect()
    }

    #[test]
    fn drops_absent_and_empty_entries() {
        let list = errors(&[Some("Required"), None, Some("")]);
        assert_eq!(as_strs(&visible_errors(Some(&list))), vec!["Required"]);
    }

    #[test]
    fn preserves_input_order() {
        let list = errors(&[Some("Too short"), Some("Needs a digit"), Some("Too common")]);
        assert_eq!(
            as_strs(&visible_errors(Some(&list))),
            vec!["Too short", "Needs a digit", "Too common"]
        );
    }

    #[test]
    fn absent_list_yields_nothing() {
        assert!(visible_errors(None).is_empty());
    }

    #[test]
    fn all_blank_entries_yield_nothing() {
        let list = errors(&[None, Some(""), None]);
        assert!(visible_errors(Some(&list)).is_empty());
    }
}
