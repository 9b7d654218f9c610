use crate::models::SearchKind;

pub const PICKER_TITLE: &str = "Select search type";

/// Modal listing the search kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindPicker {
    visible: bool,
}

impl KindPicker {
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Close without a selection (tap outside the options).
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn options(&self) -> &'static [SearchKind] {
        &SearchKind::ALL
    }

    /// One-based option lookup, as numbered on screen.
    pub fn option_at(&self, number: usize) -> Option<SearchKind> {
        number
            .checked_sub(1)
            .and_then(|i| self.options().get(i).copied())
    }
}
