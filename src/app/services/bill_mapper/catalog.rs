//! Column catalog: name-based index lookup over the source header
//!
//! Source exports may carry the same column name more than once (Jira emits
//! one "Custom field (Amount)" per field context), and both occurrences are
//! meaningful. The catalog therefore keeps two views: a first-occurrence map
//! used for presence checks and primary lookups, and an ordered multimap of
//! every occurrence used for value-resolution fallback scans. The two views
//! intentionally diverge; presence is strict, resolution is broad.

use std::collections::HashMap;

/// Index lookup over a parsed header, duplicates preserved
#[derive(Debug, Clone)]
pub struct ColumnCatalog {
    /// Name -> leftmost column index
    first_index: HashMap<String, usize>,

    /// Name -> every column index, in left-to-right order
    all_indices: HashMap<String, Vec<usize>>,
}

impl ColumnCatalog {
    /// Build both lookup views from a header row
    pub fn build(header: &[String]) -> Self {
        let mut first_index = HashMap::new();
        let mut all_indices: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, name) in header.iter().enumerate() {
            let name = name.trim();
            first_index.entry(name.to_string()).or_insert(index);
            all_indices.entry(name.to_string()).or_default().push(index);
        }

        Self {
            first_index,
            all_indices,
        }
    }

    /// Leftmost index of a column name
    pub fn first_index(&self, name: &str) -> Option<usize> {
        self.first_index.get(name).copied()
    }

    /// Every index of a column name, left to right
    pub fn indices(&self, name: &str) -> &[usize] {
        self.all_indices.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Leftmost index of the first name in `names` that exists
    pub fn first_index_of_any(&self, names: &[String]) -> Option<usize> {
        names.iter().find_map(|name| self.first_index(name))
    }

    /// Required names absent from the header, in required-list order
    ///
    /// Consults only the first-occurrence view.
    pub fn missing_required(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.first_index.contains_key(name.as_str()))
            .cloned()
            .collect()
    }
}
