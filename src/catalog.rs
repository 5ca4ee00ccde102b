// src/catalog.rs
//
// The Catalog owns the loaded records; FilteredView is the derived,
// zero-copy projection for display. The view holds row indices into the
// catalog rather than cloned records, and is recomputed in full on every
// selection change (no partial updates, no cache across loads).

use crate::record::Record;

/// Ordered set of dish records for the current run.
/// Rebuilt fresh from the data directory on every load.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub records: Vec<Record>,
}

/// Selected province: `All` shows the full catalog; `One` is an exact,
/// case-sensitive match against `Record::province`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ProvinceFilter {
    #[default]
    All,
    One(String),
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct province values, lexicographically sorted.
    /// The "all" sentinel is a UI concern and is not part of this list.
    pub fn provinces(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.province) {
                out.push(r.province.clone());
            }
        }
        out.sort();
        out
    }
}

/// Positions of the kept rows, in catalog order.
#[derive(Clone, Debug)]
pub struct FilteredView {
    pub row_ix: Vec<usize>,
}

impl FilteredView {
    pub fn from_catalog(catalog: &Catalog, filter: &ProvinceFilter) -> Self {
        let row_ix = match filter {
            ProvinceFilter::All => (0..catalog.records.len()).collect(),
            ProvinceFilter::One(p) => catalog
                .records
                .iter()
                .enumerate()
                .filter(|(_, r)| &r.province == p)
                .map(|(i, _)| i)
                .collect(),
        };
        Self { row_ix }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single record by projected index (no cloning).
    pub fn record<'a>(&self, catalog: &'a Catalog, i: usize) -> Option<&'a Record> {
        self.row_ix.get(i).and_then(|&ix| catalog.records.get(ix))
    }
}
