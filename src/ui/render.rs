//! Text rendering for the screens.
//!
//! Each screen is first reduced to a small view model and then written out
//! as plain lines.

use std::fmt::Write;

use crate::models::BookRecord;

use super::field::FieldState;
use super::login::{LoginField, LoginForm};
use super::picker::{KindPicker, PICKER_TITLE};
use super::search::SearchScreen;

pub const LOADING_INDICATOR: &str = "Searching...";

/// One row of the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Stable identity of the row within the list
    pub key: String,
    pub title: String,
    pub author_line: Option<String>,
    pub subject_line: Option<String>,
    pub year_line: Option<String>,
}

impl RowView {
    /// `fallback_key` is used when the record has no provider key.
    pub fn from_record(record: &BookRecord, fallback_key: String) -> Self {
        Self {
            key: record.key.clone().unwrap_or(fallback_key),
            title: record.title.clone().unwrap_or_default(),
            author_line: (!record.author_names.is_empty())
                .then(|| format!("Author: {}", record.author_names.join(", "))),
            subject_line: (!record.subjects.is_empty())
                .then(|| format!("Genre: {}", record.subjects.join(", "))),
            year_line: record
                .first_publish_year
                .map(|year| format!("First published: {}", year)),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.author_line.as_deref())
            .chain(self.subject_line.as_deref())
            .chain(self.year_line.as_deref())
    }
}

/// Rows for the current result set.
///
/// Records without a provider key get `<seq>#<position>`, which never
/// collides with a key from a previous result set.
pub fn result_rows(screen: &SearchScreen) -> Vec<RowView> {
    let seq = screen.results_seq();
    screen
        .results()
        .iter()
        .enumerate()
        .map(|(i, record)| RowView::from_record(record, format!("{}#{}", seq, i)))
        .collect()
}

fn write_field(out: &mut String, placeholder: &str, field: &FieldState, masked: bool) {
    let shown = if field.value.is_empty() {
        format!("<{}>", placeholder)
    } else if masked {
        "*".repeat(field.value.chars().count())
    } else {
        field.value.clone()
    };
    let _ = writeln!(out, "  {}: {}", placeholder, shown);
    if let Some(error) = &field.error {
        let _ = writeln!(out, "    ! {}", error);
    }
}

pub fn render_login(form: &LoginForm) -> String {
    let mut out = String::new();
    out.push_str("Login\n");
    out.push_str("Welcome\n");
    write_field(&mut out, "Username", form.field(LoginField::Identifier), false);
    write_field(&mut out, "Password", form.field(LoginField::Secret), true);
    out
}

pub fn render_picker(picker: &KindPicker) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", PICKER_TITLE);
    for (i, kind) in picker.options().iter().enumerate() {
        let _ = writeln!(out, "  {}) {}", i + 1, kind);
    }
    out
}

pub fn render_search(screen: &SearchScreen) -> String {
    let mut out = String::new();
    out.push_str("Search Books\n");
    match screen.kind() {
        Some(kind) => {
            let _ = writeln!(out, "[Search by: {}]", kind);
        }
        None => {
            let _ = writeln!(out, "[{}]", PICKER_TITLE);
        }
    }
    write_field(&mut out, "Search term", screen.query(), false);

    if screen.picker().is_visible() {
        out.push_str(&render_picker(screen.picker()));
        return out;
    }

    if screen.is_loading() {
        let _ = writeln!(out, "{}", LOADING_INDICATOR);
        return out;
    }

    for row in result_rows(screen) {
        let mut lines = row.lines();
        if let Some(title) = lines.next() {
            let _ = writeln!(out, "- {}", title);
        }
        for line in lines {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}
