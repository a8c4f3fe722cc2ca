//! Code assignment: the left/right path from the root to each leaf.
//!
//! Descending left appends a `0` bit, descending right appends a `1`. The
//! walk keeps a single path buffer and truncates it back to the parent's
//! length before each step, so siblings always extend the same prefix.

use crate::tree::Node;
use bitvec::prelude::*;

/// Depth-first, left-first iterator over `(symbol, code)` pairs.
///
/// Uses an explicit stack; the order matches a recursive walk that visits
/// the left subtree before the right one.
pub struct Codes<'a, Symbol> {
    // (node, length of the parent's path, bit taken to reach the node)
    stack: Vec<(&'a Node<Symbol>, usize, Option<bool>)>,
    path: BitVec,
}

impl<'a, Symbol> Codes<'a, Symbol> {
    pub fn new(root: &'a Node<Symbol>) -> Self {
        Self {
            stack: vec![(root, 0, None)],
            path: BitVec::new(),
        }
    }
}

impl<'a, Symbol> Iterator for Codes<'a, Symbol> {
    type Item = (&'a Symbol, BitBox);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, prefix_len, bit)) = self.stack.pop() {
            self.path.truncate(prefix_len);
            if let Some(b) = bit {
                self.path.push(b);
            }

            if let Some(sym) = node.symbol() {
                return Some((sym, self.path.clone().into_boxed_bitslice()));
            }

            if let Some((left, right)) = node.children() {
                let len = self.path.len();
                self.stack.push((right, len, Some(true)));
                self.stack.push((left, len, Some(false)));
            }
        }

        None
    }
}

pub fn assign_codes<Symbol: Clone>(root: &Node<Symbol>) -> Vec<(Symbol, BitBox)> {
    Codes::new(root)
        .map(|(s, code)| (s.clone(), code))
        .collect()
}

pub fn code_string(code: &BitSlice) -> String {
    code.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

/// Parse a string of `'0'` and `'1'`; `None` on any other character.
pub fn parse_code(s: &str) -> Option<BitBox> {
    s.chars()
        .map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect::<Option<BitVec>>()
        .map(|bv| bv.into_boxed_bitslice())
}
