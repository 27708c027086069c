//! Result rows, the deduplicated result table, and the export schema.

use std::collections::HashSet;

/// Placeholder written into any field the provider did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column headers of the exported spreadsheet, in order.
pub const EXPORT_COLUMNS: [&str; 5] = [
    "REGIAO",
    "NOME DA EMPRESA",
    "NOME DO CONTATO",
    "TELEFONE",
    "SITE",
];

/// Returns `value` if it holds non-blank text, otherwise [`NOT_AVAILABLE`].
#[must_use]
pub fn or_not_available(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// One business found by a search, with its contact details.
///
/// Every field holds either real data or [`NOT_AVAILABLE`]; use
/// [`ResultRow::new`] to uphold that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultRow {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
}

impl ResultRow {
    #[must_use]
    pub fn new(
        name: Option<String>,
        address: Option<String>,
        phone: Option<String>,
        website: Option<String>,
    ) -> Self {
        Self {
            name: or_not_available(name),
            address: or_not_available(address),
            phone: or_not_available(phone),
            website: or_not_available(website),
        }
    }
}

/// Ordered collection of [`ResultRow`]s for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    /// Appends every row of `other` after the rows already held.
    #[must_use]
    pub fn concat(mut self, other: ResultTable) -> Self {
        self.rows.extend(other.rows);
        self
    }

    /// Drops rows equal (on all four fields) to an earlier row. Survivors keep
    /// their relative order.
    #[must_use]
    pub fn dedup(self) -> Self {
        let mut seen: HashSet<ResultRow> = HashSet::with_capacity(self.rows.len());
        let rows = self
            .rows
            .into_iter()
            .filter(|row| seen.insert(row.clone()))
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows renamed into the export schema, in table order.
    #[must_use]
    pub fn export_records(&self) -> Vec<ExportRecord<'_>> {
        self.rows.iter().map(ExportRecord::from).collect()
    }
}

impl From<Vec<ResultRow>> for ResultTable {
    fn from(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }
}

/// A [`ResultRow`] in spreadsheet shape. The contact name column is never
/// filled by the provider and is always blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRecord<'a> {
    pub regiao: &'a str,
    pub nome_da_empresa: &'a str,
    pub nome_do_contato: &'a str,
    pub telefone: &'a str,
    pub site: &'a str,
}

impl ExportRecord<'_> {
    /// Cell values in [`EXPORT_COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 5] {
        [
            self.regiao,
            self.nome_da_empresa,
            self.nome_do_contato,
            self.telefone,
            self.site,
        ]
    }
}

impl<'a> From<&'a ResultRow> for ExportRecord<'a> {
    fn from(row: &'a ResultRow) -> Self {
        Self {
            regiao: &row.address,
            nome_da_empresa: &row.name,
            nome_do_contato: "",
            telefone: &row.phone,
            site: &row.website,
        }
    }
}
