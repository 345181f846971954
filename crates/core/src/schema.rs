//! Resource schema descriptors.
//!
//! A [`Schema`] describes one table: its URL segment, its columns and which of them are
//! mandatory on create, and the human-readable messages returned to clients. The repository
//! and the stores are written once against this descriptor.

/// Storage type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    /// Calendar date without time, `YYYY-MM-DD` on the wire.
    Date,
}

/// One column of a resource table.
///
/// `name` is both the SQL column name and the JSON key used on the wire.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub required: bool,
}

impl Column {
    pub const fn required(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Client-facing messages for one resource.
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    pub list_failed: &'static str,
    pub missing_fields: &'static str,
    pub create_failed: &'static str,
    pub not_found: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
}

/// Descriptor of one resource collection.
#[derive(Debug)]
pub struct Schema {
    /// URL path segment, e.g. `clinicas`.
    pub path: &'static str,
    /// SQL table name.
    pub table: &'static str,
    /// OpenAPI component name of the resource body.
    pub component: &'static str,
    /// Every non-id column, in statement order.
    pub columns: &'static [Column],
    pub messages: Messages,
}

impl Schema {
    pub fn required_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.required)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: Schema = Schema {
        path: "amostras",
        table: "amostras",
        component: "Sample",
        columns: &[
            Column::required("nome", ColumnKind::Text),
            Column::optional("nota", ColumnKind::Text),
            Column::required("validade", ColumnKind::Date),
        ],
        messages: Messages {
            list_failed: "",
            missing_fields: "",
            create_failed: "",
            not_found: "",
            updated: "",
            update_failed: "",
            deleted: "",
            delete_failed: "",
        },
    };

    #[test]
    fn test_required_columns_keeps_declaration_order() {
        let required: Vec<_> = SAMPLE.required_columns().map(|c| c.name).collect();
        assert_eq!(required, vec!["nome", "validade"]);
    }

    #[test]
    fn test_column_lookup() {
        assert_eq!(
            SAMPLE.column("validade").map(|c| c.kind),
            Some(ColumnKind::Date)
        );
        assert!(SAMPLE.column("id").is_none());
    }
}
