//! Per-symbol occurrence counts over a fixed byte alphabet.

use crate::config::{Config, MAX_ALPHABET_SIZE};
use crate::error::{Error, Result};
use std::io::{ErrorKind, Read};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
    ignored: u64,
}

impl FrequencyTable {
    /// An all-zero table over symbols `0..alphabet_size`.
    pub fn new(alphabet_size: usize) -> Result<Self> {
        if !(1..=MAX_ALPHABET_SIZE).contains(&alphabet_size) {
            return Err(Error::InvalidAlphabet(alphabet_size));
        }

        Ok(Self {
            counts: vec![0; alphabet_size],
            ignored: 0,
        })
    }

    pub fn scan(mut input: impl Read, config: &Config) -> Result<Self> {
        let mut table = Self::new(config.alphabet_size)?;
        let mut buf = [0u8; 8 * 1024];

        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            table.extend(&buf[..n]);
        }

        debug!(
            total = table.total(),
            distinct = table.distinct(),
            ignored = table.ignored,
            "scanned input"
        );
        Ok(table)
    }

    pub fn from_bytes(bytes: &[u8], config: &Config) -> Result<Self> {
        let mut table = Self::new(config.alphabet_size)?;
        table.extend(bytes);
        Ok(table)
    }

    fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            match self.counts.get_mut(b as usize) {
                Some(count) => *count += 1,
                None => {
                    trace!(byte = b, "skipping byte outside alphabet");
                    self.ignored += 1;
                }
            }
        }
    }

    pub fn alphabet_size(&self) -> usize {
        self.counts.len()
    }

    /// Occurrences of `symbol`; zero for symbols outside the alphabet.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn ignored(&self) -> u64 {
        self.ignored
    }

    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// `(symbol, count)` for every non-zero count, in ascending symbol order.
    pub fn seeds(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}
