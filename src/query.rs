//! Conditional select construction with bound parameters

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Pool, Sqlite};

/// A select statement that grows optional predicate clauses.
///
/// Column names are compile-time constants; filter values are collected
/// and bound positionally, never spliced into the statement text.
pub(crate) struct SelectBuilder {
    sql: String,
    binds: Vec<String>,
}

impl SelectBuilder {
    pub fn new(base: &str) -> Self {
        Self {
            sql: base.to_owned(),
            binds: Vec::new(),
        }
    }

    /// Append a case-insensitive substring predicate on `column`,
    /// AND-composed with any predicate already present. `None` leaves
    /// the statement untouched.
    pub fn contains(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.sql.push_str(if self.binds.is_empty() {
                " WHERE "
            } else {
                " AND "
            });
            self.sql.push_str("lower(");
            self.sql.push_str(column);
            self.sql.push_str(") LIKE '%' || lower(?) || '%'");
            self.binds.push(value.to_owned());
        }
        self
    }

    /// Fetch all rows, binding the collected values in order.
    pub async fn fetch_all<T>(self, pool: &Pool<Sqlite>) -> sqlx::Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as::<_, T>(&self.sql);
        for value in &self.binds {
            query = query.bind(value);
        }
        query.fetch_all(pool).await
    }

    #[cfg(test)]
    fn sql(&self) -> &str {
        &self.sql
    }

    #[cfg(test)]
    fn binds(&self) -> &[String] {
        &self.binds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "SELECT id, title, performer FROM songs";

    #[test]
    fn no_filters_leaves_base_statement() {
        let q = SelectBuilder::new(BASE)
            .contains("title", None)
            .contains("performer", None);
        assert_eq!(q.sql(), BASE);
        assert!(q.binds().is_empty());
    }

    #[test]
    fn first_filter_opens_where_clause() {
        let q = SelectBuilder::new(BASE)
            .contains("title", Some("life"))
            .contains("performer", None);
        assert_eq!(
            q.sql(),
            "SELECT id, title, performer FROM songs \
             WHERE lower(title) LIKE '%' || lower(?) || '%'"
        );
        assert_eq!(q.binds(), ["life"]);
    }

    #[test]
    fn skipped_filter_does_not_shift_clause_glue() {
        let q = SelectBuilder::new(BASE)
            .contains("title", None)
            .contains("performer", Some("coldplay"));
        assert_eq!(
            q.sql(),
            "SELECT id, title, performer FROM songs \
             WHERE lower(performer) LIKE '%' || lower(?) || '%'"
        );
        assert_eq!(q.binds(), ["coldplay"]);
    }

    #[test]
    fn second_filter_joins_with_and() {
        let q = SelectBuilder::new(BASE)
            .contains("title", Some("life"))
            .contains("performer", Some("coldplay"));
        assert_eq!(
            q.sql(),
            "SELECT id, title, performer FROM songs \
             WHERE lower(title) LIKE '%' || lower(?) || '%' \
             AND lower(performer) LIKE '%' || lower(?) || '%'"
        );
        assert_eq!(q.binds(), ["life", "coldplay"]);
    }

    #[test]
    fn filter_values_never_reach_the_statement_text() {
        let q = SelectBuilder::new(BASE).contains("title", Some("'; DROP TABLE songs; --"));
        assert!(!q.sql().contains("DROP"));
        assert_eq!(q.binds(), ["'; DROP TABLE songs; --"]);
    }
}
