//! In-memory page
//!
//! Holds field values, checkboxes, lists, text displays and raised alerts
//! behind one lock. Used by the terminal shell and by tests.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::outbound::{FieldId, ListId, PagePort, TextId, ToggleId};

#[derive(Default)]
struct PageState {
    fields: HashMap<&'static str, String>,
    toggles: HashMap<&'static str, bool>,
    lists: BTreeMap<&'static str, Vec<String>>,
    texts: BTreeMap<&'static str, String>,
    alerts: Vec<String>,
}

#[derive(Default)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Simulate the user typing into a field
    pub fn type_into(&self, field: FieldId, value: &str) {
        self.lock().fields.insert(field.0, value.to_string());
    }

    /// Simulate the user ticking or unticking a checkbox
    pub fn set_checked(&self, toggle: ToggleId, checked: bool) {
        self.lock().toggles.insert(toggle.0, checked);
    }

    pub fn field(&self, field: FieldId) -> String {
        self.lock().fields.get(field.0).cloned().unwrap_or_default()
    }

    pub fn list(&self, list: ListId) -> Vec<String> {
        self.lock().lists.get(list.0).cloned().unwrap_or_default()
    }

    /// Text of a display, empty if never set
    pub fn text(&self, target: TextId) -> String {
        self.lock().texts.get(target.0).cloned().unwrap_or_default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    /// Drain alerts raised since the last call
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.lock().alerts)
    }

    /// Plain-text dump of every non-empty display and list
    pub fn render(&self) -> String {
        let state = self.lock();
        let mut out = String::new();
        for (id, text) in state.texts.iter().filter(|(_, t)| !t.is_empty()) {
            let _ = writeln!(out, "{}: {}", id, text);
        }
        for (id, entries) in state.lists.iter().filter(|(_, e)| !e.is_empty()) {
            let _ = writeln!(out, "{}: [{}]", id, entries.join(", "));
        }
        out
    }
}

impl PagePort for MemoryPage {
    fn field_value(&self, field: FieldId) -> String {
        self.field(field)
    }

    fn clear_field(&self, field: FieldId) {
        self.lock().fields.insert(field.0, String::new());
    }

    fn is_checked(&self, toggle: ToggleId) -> bool {
        self.lock().toggles.get(toggle.0).copied().unwrap_or(false)
    }

    fn append_entries(&self, entries: &[(ListId, String)]) {
        let mut state = self.lock();
        for (list, text) in entries {
            state.lists.entry(list.0).or_default().push(text.clone());
        }
    }

    fn set_text(&self, target: TextId, text: &str) {
        self.lock().texts.insert(target.0, text.to_string());
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldId = FieldId("newName");
    const CARDS: ListId = ListId("container");

    #[test]
    fn typed_values_are_read_back_and_cleared() {
        let page = MemoryPage::new();
        page.type_into(NAME, "Vex");
        assert_eq!(page.field_value(NAME), "Vex");
        page.clear_field(NAME);
        assert_eq!(page.field_value(NAME), "");
    }

    #[test]
    fn appends_keep_order() {
        let page = MemoryPage::new();
        page.append_entries(&[(CARDS, "a".into())]);
        page.append_entries(&[(CARDS, "b".into())]);
        assert_eq!(page.list(CARDS), vec!["a", "b"]);
    }

    #[test]
    fn alerts_drain() {
        let page = MemoryPage::new();
        page.alert("one");
        assert_eq!(page.take_alerts(), vec!["one"]);
        assert!(page.alerts().is_empty());
    }

    #[test]
    fn unchecked_by_default() {
        let page = MemoryPage::new();
        assert!(!page.is_checked(ToggleId("check")));
        page.set_checked(ToggleId("check"), true);
        assert!(page.is_checked(ToggleId("check")));
    }

    #[test]
    fn render_skips_empty_elements() {
        let page = MemoryPage::new();
        page.set_text(TextId("gold"), "5 Gold pieces.");
        page.set_text(TextId("silver"), "");
        page.append_entries(&[(CARDS, "Vex".into())]);
        assert_eq!(page.render(), "gold: 5 Gold pieces.\ncontainer: [Vex]\n");
    }
}
