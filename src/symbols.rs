//! Symbol table for synthesized branch-target labels

use std::collections::BTreeMap;

/// Default prefix for synthesized labels.
pub const DEFAULT_LABEL_PREFIX: &str = "loc_";

/// Address to label map, populated only from branch-target classifications.
///
/// Labels are insert-if-absent: once an address is named it keeps that name
/// for the lifetime of the table.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    prefix: String,
    labels: BTreeMap<u32, String>,
}

impl SymbolTable {
    /// Create a new empty symbol table using the default label prefix
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_LABEL_PREFIX)
    }

    /// Create a new empty symbol table with a custom label prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            labels: BTreeMap::new(),
        }
    }

    /// Synthesize a label for `address` unless it already has one.
    ///
    /// Returns true if a new label was created.
    pub fn insert(&mut self, address: u32) -> bool {
        if self.labels.contains_key(&address) {
            return false;
        }

        let name = format!("{}{:x}", self.prefix, address);
        self.labels.insert(address, name);
        true
    }

    /// Look up the label bound to an address
    pub fn lookup(&self, address: u32) -> Option<&str> {
        self.labels.get(&address).map(String::as_str)
    }

    /// True if the address has a label
    pub fn contains(&self, address: u32) -> bool {
        self.labels.contains_key(&address)
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if no labels have been synthesized
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All labels in address order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.labels.iter().map(|(&address, name)| (address, name.as_str()))
    }

    /// Drop every label at or above `address`.
    ///
    /// Only used when a cartridge swap wipes the classification of that range.
    pub(crate) fn discard_from(&mut self, address: u32) {
        self.labels.split_off(&address);
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table_insert_lookup() {
        let mut table = SymbolTable::new();

        assert!(table.insert(0x2150));
        assert!(table.insert(0x18000));

        assert_eq!(table.lookup(0x2150), Some("loc_2150"));
        assert_eq!(table.lookup(0x18000), Some("loc_18000"));
        assert!(table.lookup(0x2151).is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_symbol_table_insert_is_idempotent() {
        let mut table = SymbolTable::with_prefix("sub_");

        assert!(table.insert(0x1234));
        assert!(!table.insert(0x1234));

        assert_eq!(table.lookup(0x1234), Some("sub_1234"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_symbol_table_discard_from() {
        let mut table = SymbolTable::new();
        table.insert(0x0100);
        table.insert(0x1000);
        table.insert(0x4000);

        table.discard_from(0x1000);

        let addresses: Vec<u32> = table.iter().map(|(address, _)| address).collect();
        assert_eq!(addresses, vec![0x0100]);
    }
}
