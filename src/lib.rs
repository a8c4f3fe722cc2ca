//! Huffman code tables for byte streams.
//!
//! Bytes are counted into a [`FrequencyTable`], one leaf per seen symbol is
//! seeded into a bounded [`MinPriorityQueue`], and the two lightest nodes are
//! combined until a single [`HuffmanTree`] root remains. Walking the tree
//! gives every symbol its prefix-free code.
//!
//! ```
//! use huffman::{build_code_table, Config};
//!
//! let table = build_code_table(&b"aaabbc"[..], &Config::default())?;
//! assert_eq!(table.get(b'a').unwrap().code.len(), 1);
//! # Ok::<(), huffman::Error>(())
//! ```

pub mod codes;
pub mod config;
pub mod error;
pub mod frequency;
pub mod queue;
pub mod report;
pub mod tree;

pub use codes::{assign_codes, code_string, Codes};
pub use config::{Config, Weighting};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use queue::MinPriorityQueue;
pub use report::{CodeEntry, CodeTable};
pub use tree::{huffman, HuffmanTree, Node};

use std::io::Read;

/// Scan `input` to end of stream and build its code table.
pub fn build_code_table(input: impl Read, config: &Config) -> Result<CodeTable> {
    config.validate()?;
    let table = FrequencyTable::scan(input, config)?;
    CodeTable::from_frequencies(&table, config)
}
