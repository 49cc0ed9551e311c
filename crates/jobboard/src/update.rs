//! Partial-update SET clause compilation.
//!
//! [`UpdateSet`] collects an ordered set of field assignments and compiles
//! them into a parameterized `SET` fragment. Physical column names come from
//! a [`ColumnMap`] allow-list, so no externally supplied string ever becomes
//! SQL syntax; values only ever travel as bound parameters.

use crate::error::{StoreError, StoreResult};
use crate::param::{Param, ParamList};
use tokio_postgres::types::ToSql;

/// Translation table from logical field names to physical column names.
///
/// Fields without an entry pass through verbatim, so callers only list the
/// names that actually differ (`companyHandle` -> `company_handle`).
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    entries: Vec<(&'static str, &'static str)>,
}

impl ColumnMap {
    /// Create an empty map (every field resolves to itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a logical field name to a physical column name.
    pub fn map(mut self, field: &'static str, column: &'static str) -> Self {
        self.entries.push((field, column));
        self
    }

    fn resolve<'a>(&self, field: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, column)| *column)
            .unwrap_or(field)
    }
}

/// An ordered set of field assignments for a partial update.
///
/// Compiling an empty set is an error, not a no-op: a caller that reached the
/// store with nothing to change has a bug upstream.
#[derive(Clone, Debug, Default)]
pub struct UpdateSet {
    fields: Vec<(String, Param)>,
}

impl UpdateSet {
    /// Create a new empty update set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a field value.
    pub fn set<T: ToSql + Send + Sync + 'static>(mut self, field: &str, value: T) -> Self {
        self.fields.push((field.to_string(), Param::new(value)));
        self
    }

    /// Assign an optional field value (None => skip).
    pub fn set_opt<T: ToSql + Send + Sync + 'static>(self, field: &str, value: Option<T>) -> Self {
        if let Some(v) = value { self.set(field, v) } else { self }
    }

    /// Number of assignments collected so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no assignments have been collected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Compile into a `SET` fragment and its positional parameters.
    ///
    /// Each field emits `"column"=$n` in insertion order, where `n` is the
    /// 1-based position in the returned [`ParamList`]; the Nth placeholder
    /// always binds the Nth parameter.
    pub fn compile(&self, columns: &ColumnMap) -> StoreResult<(String, ParamList)> {
        if self.fields.is_empty() {
            return Err(StoreError::invalid_argument("no data to update"));
        }

        let mut params = ParamList::new();
        let mut terms = Vec::with_capacity(self.fields.len());
        for (field, value) in &self.fields {
            let idx = params.push_param(value.clone());
            let mut term = String::new();
            push_quoted(&mut term, columns.resolve(field));
            term.push_str(&format!("=${idx}"));
            terms.push(term);
        }

        Ok((terms.join(", "), params))
    }
}

/// Render a column as a quoted identifier, escaping `"` as `""`.
fn push_quoted(out: &mut String, name: &str) {
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
            out.push('"');
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}
