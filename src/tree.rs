use crate::codes::Codes;
use crate::config::Config;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::queue::MinPriorityQueue;
use bitvec::prelude::*;
use derivative::Derivative;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use total_float_wrap::TotalF64;
use tracing::{debug, trace};

/// A leaf carries a symbol and no children; an internal node carries two
/// children and no symbol. The two constructors are the only way to build
/// one, so no other shape exists.
///
/// Nodes compare by weight alone.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
pub struct Node<Symbol> {
    weight: TotalF64,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    symbol: Option<Symbol>,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    left: Option<Box<Node<Symbol>>>,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    right: Option<Box<Node<Symbol>>>,
}

impl<Symbol> Node<Symbol> {
    pub fn new(s: Symbol, w: f64) -> Self {
        Self {
            weight: TotalF64(w),
            symbol: Some(s),
            left: None,
            right: None,
        }
    }

    pub fn from_children(left: Node<Symbol>, right: Node<Symbol>) -> Self {
        Self {
            weight: TotalF64(left.weight.0 + right.weight.0),
            symbol: None,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight.0
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    pub fn left(&self) -> Option<&Node<Symbol>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<Symbol>> {
        self.right.as_deref()
    }

    pub fn children(&self) -> Option<(&Node<Symbol>, &Node<Symbol>)> {
        match (self.left(), self.right()) {
            (Some(l), Some(r)) => Some((l, r)),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}

impl<Symbol: Ord> Node<Symbol> {
    /// Join two nodes taken from the queue, `a` first. The lighter node goes
    /// left. Equal-weight leaves are ordered by symbol; any other tie keeps
    /// `a` on the left.
    pub fn combine(a: Node<Symbol>, b: Node<Symbol>) -> Self {
        let a_left = match (a.weight.cmp(&b.weight), &a.symbol, &b.symbol) {
            (Ordering::Less, _, _) => true,
            (Ordering::Greater, _, _) => false,
            (Ordering::Equal, Some(sa), Some(sb)) => sa <= sb,
            (Ordering::Equal, _, _) => true,
        };

        if a_left {
            Self::from_children(a, b)
        } else {
            Self::from_children(b, a)
        }
    }
}

// Children are detached onto a heap-allocated stack before they are freed,
// so dropping a deep tree never recurses.
impl<Symbol> Drop for Node<Symbol> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<Symbol>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Pre-order, left-first walk over a tree.
pub struct Nodes<'a, Symbol> {
    stack: Vec<&'a Node<Symbol>>,
}

impl<'a, Symbol> Iterator for Nodes<'a, Symbol> {
    type Item = &'a Node<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some((l, r)) = node.children() {
            self.stack.push(r);
            self.stack.push(l);
        }
        Some(node)
    }
}

#[derive(Debug, Clone)]
pub struct HuffmanTree<Symbol> {
    root: Node<Symbol>,
}

impl<Symbol: Ord> HuffmanTree<Symbol> {
    /// Seed a queue of `capacity` slots with one leaf per `(symbol, weight)`
    /// and combine until a single root is left. No seeds means no tree.
    pub fn build<I>(seeds: I, capacity: usize) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = (Symbol, f64)>,
    {
        let mut queue = MinPriorityQueue::with_capacity(capacity)?;
        for (s, w) in seeds {
            queue.insert(Node::new(s, w))?;
        }

        Self::from_queue(queue)
    }

    pub fn from_queue(mut queue: MinPriorityQueue<Node<Symbol>>) -> Result<Option<Self>> {
        if queue.is_empty() {
            debug!("no symbols to build a tree from");
            return Ok(None);
        }

        debug!(leaves = queue.len(), "building tree");
        while queue.len() > 1 {
            let a = queue.extract_min()?;
            let b = queue.extract_min()?;
            trace!(a = a.weight(), b = b.weight(), "combining nodes");
            queue.insert(Node::combine(a, b))?;
        }

        let root = queue.extract_min()?;
        debug!(weight = root.weight(), "built tree");
        Ok(Some(Self { root }))
    }
}

impl<Symbol> HuffmanTree<Symbol> {
    pub fn root(&self) -> &Node<Symbol> {
        &self.root
    }

    pub fn weight(&self) -> f64 {
        self.root.weight()
    }

    pub fn nodes(&self) -> Nodes<'_, Symbol> {
        Nodes {
            stack: vec![&self.root],
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|n| n.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes().filter(|n| !n.is_leaf()).count()
    }

    /// `(symbol, code)` for every leaf, in left-first depth-first order.
    pub fn codes(&self) -> Codes<'_, Symbol> {
        Codes::new(&self.root)
    }
}

impl<Symbol: PartialEq> HuffmanTree<Symbol> {
    /// Search the tree for `symbol` and return the path leading to it.
    pub fn code_for(&self, symbol: &Symbol) -> Option<BitBox> {
        self.codes()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| code)
    }
}

impl<Symbol: Display> HuffmanTree<Symbol> {
    /// An indented outline of the tree, one node per line.
    pub fn structure(&self) -> Structure<'_, Symbol> {
        Structure { root: &self.root }
    }
}

pub struct Structure<'a, Symbol> {
    root: &'a Node<Symbol>,
}

impl<Symbol: Display> Display for Structure<'_, Symbol> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.root, 0usize, "root")];

        while let Some((node, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match (&node.symbol, node.children()) {
                (Some(s), _) => {
                    writeln!(f, "{}{} -> leaf {} [weight: {}]", indent, label, s, node.weight())?
                }
                (None, Some((l, r))) => {
                    stack.push((r, depth + 1, "R"));
                    stack.push((l, depth + 1, "L"));
                    writeln!(f, "{}{} -> internal [weight: {}]", indent, label, node.weight())?
                }
                (None, None) => {}
            }
        }

        Ok(())
    }
}

/// Build the tree for a scanned table, weighting each leaf per `config`.
pub fn huffman(table: &FrequencyTable, config: &Config) -> Result<Option<HuffmanTree<u8>>> {
    config.validate()?;
    let total = table.total();
    let seeds = table
        .seeds()
        .map(|(s, count)| (s, config.weighting.weight(count, total)));

    HuffmanTree::build(seeds, config.queue_capacity())
}
