//! The symbol → code table handed to callers for rendering.

use crate::codes::{code_string, parse_code};
use crate::config::Config;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::tree::{huffman, HuffmanTree};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub symbol: u8,
    pub frequency: u64,
    pub weight: f64,
    #[serde(with = "code_bits")]
    pub code: BitBox,
}

/// Rows in the order the tree walk discovers the leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree<u8>, table: &FrequencyTable, config: &Config) -> Self {
        let total = table.total();
        let entries = tree
            .codes()
            .map(|(&symbol, code)| {
                let frequency = table.count(symbol);
                CodeEntry {
                    symbol,
                    frequency,
                    weight: config.weighting.weight(frequency, total),
                    code,
                }
            })
            .collect();

        Self { entries }
    }

    /// Build the tree for `table` and collect its codes. An empty table gives
    /// an empty code table.
    pub fn from_frequencies(table: &FrequencyTable, config: &Config) -> Result<Self> {
        Ok(match huffman(table, config)? {
            Some(tree) => Self::from_tree(&tree, table, config),
            None => Self::default(),
        })
    }

    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, symbol: u8) -> Option<&CodeEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    pub fn total_symbols(&self) -> u64 {
        self.entries.iter().map(|e| e.frequency).sum()
    }

    /// Length in bits of the input once every symbol is replaced by its code.
    pub fn encoded_bits(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| e.frequency * e.code.len() as u64)
            .sum()
    }
}

fn printable(symbol: u8) -> String {
    match symbol {
        b' ' => "' '".to_string(),
        0x21..=0x7e => (symbol as char).to_string(),
        _ => std::ascii::escape_default(symbol).to_string(),
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6}  {:>4}  {:>9}  {:>12}  code",
            "symbol", "char", "frequency", "weight"
        )?;
        for e in &self.entries {
            writeln!(
                f,
                "{:>6}  {:>4}  {:>9}  {:>12.6}  {}",
                e.symbol,
                printable(e.symbol),
                e.frequency,
                e.weight,
                code_string(&e.code)
            )?;
        }
        write!(
            f,
            "{} distinct, {} symbols, {} bits encoded",
            self.entries.len(),
            self.total_symbols(),
            self.encoded_bits()
        )
    }
}

// codes travel as their '0'/'1' string
mod code_bits {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(code: &BitBox, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&code_string(code))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<BitBox, D::Error> {
        let s = String::deserialize(d)?;
        parse_code(&s).ok_or_else(|| D::Error::custom(format!("invalid code string: {:?}", s)))
    }
}
