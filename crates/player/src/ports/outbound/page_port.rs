//! Page Port - the binding layer between services and the page
//!
//! Services address page elements through the logical ids below and never
//! touch markup. The concrete page (terminal, browser, test double) decides
//! what an id maps to.

use std::fmt;

/// A text input on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(pub &'static str);

/// An ordered display list on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(pub &'static str);

/// A single-line text display on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextId(pub &'static str);

/// A checkbox on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleId(pub &'static str);

macro_rules! element_id {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                /// Element identifier in the page markup
                pub fn element_id(self) -> &'static str {
                    self.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.0)
                }
            }
        )*
    };
}

element_id!(FieldId, ListId, TextId, ToggleId);

/// Parallel lists that must always have equal length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListGroup(pub &'static [ListId]);

impl ListGroup {
    pub fn lists(self) -> &'static [ListId] {
        self.0
    }

    pub fn width(self) -> usize {
        self.0.len()
    }
}

/// Page operations needed by the services.
///
/// All calls happen on the UI task. `append_entries` applies every entry in
/// one step so a partially appended group is never observable.
pub trait PagePort: Send + Sync {
    /// Current raw value of a text input
    fn field_value(&self, field: FieldId) -> String;

    fn clear_field(&self, field: FieldId);

    fn is_checked(&self, toggle: ToggleId) -> bool;

    /// Append each entry to the end of its list, all at once
    fn append_entries(&self, entries: &[(ListId, String)]);

    fn set_text(&self, target: TextId, text: &str);

    /// Show a user-visible message
    fn alert(&self, message: &str);
}
