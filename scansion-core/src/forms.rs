//! Named verse forms
//!
//! The table is compiled in from `configs/forms.toml` and parsed on first
//! access.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::Pattern;

/// A named syllable pattern
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerseForm {
    /// Lowercase form name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Syllables per line
    pub pattern: Pattern,
}

#[derive(Debug, Deserialize)]
struct FormTable {
    form: Vec<VerseForm>,
}

static FORMS: OnceLock<std::result::Result<Vec<VerseForm>, String>> = OnceLock::new();

fn load(toml_str: &str) -> std::result::Result<Vec<VerseForm>, String> {
    let table: FormTable =
        toml::from_str(toml_str).map_err(|e| format!("failed to parse forms: {e}"))?;

    for (i, form) in table.form.iter().enumerate() {
        if table.form[..i].iter().any(|f| f.name == form.name) {
            return Err(format!("duplicate form '{}'", form.name));
        }
    }

    Ok(table.form)
}

/// All built-in forms in table order
pub fn all() -> Result<&'static [VerseForm]> {
    FORMS
        .get_or_init(|| load(include_str!("../configs/forms.toml")))
        .as_deref()
        .map_err(|e| Error::FormTable(e.clone()))
}

/// Look up a form by name, ignoring case
pub fn find(name: &str) -> Result<&'static VerseForm> {
    all()?
        .iter()
        .find(|form| form.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownForm(name.to_string()))
}
