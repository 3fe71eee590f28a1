//! Backward parser for dotted access chains.
//!
//! Given the text of one line and the column where an expression ends,
//! [`parse_dot_chain`] walks right-to-left and produces the chain of accesses
//! leading up to that column, e.g. `tokens[id].owner()` becomes
//! `tokens` (array) → `owner` (method).
//!
//! Bracket and parenthesis matching counts depth, so `a[b[0]].` and
//! `f(g(x)).` are split at the correct opening character.
//!
//! Every node that is not a call is a variable, indexed or not. `list[0]`
//! is a variable with `is_array` set; its element type comes from
//! [`ChainNode::indexes`].

/// One access in a dot chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainNode {
    pub name: String,
    /// Set unless the access is a call, so indexed names count as variables
    pub is_variable: bool,
    pub is_method: bool,
    /// At least one `[...]` index follows the name
    pub is_array: bool,
    /// Number of `[...]` indexes, `m[a][b]` has two
    pub indexes: usize,
}

/// A parsed chain stored root first; the last node is the one that ended at
/// the requested column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotChain {
    nodes: Vec<ChainNode>,
}

impl DotChain {
    pub fn nodes(&self) -> &[ChainNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when nothing parseable precedes the column.
    pub fn is_blank(&self) -> bool {
        self.terminal().name().is_empty()
    }

    /// The leftmost node.
    pub fn root(&self) -> ChainCursor<'_> {
        ChainCursor {
            chain: self,
            index: 0,
        }
    }

    /// The node that ended at the requested column.
    pub fn terminal(&self) -> ChainCursor<'_> {
        ChainCursor {
            chain: self,
            index: self.nodes.len().saturating_sub(1),
        }
    }
}

/// A position inside a [`DotChain`] with parent/child navigation.
#[derive(Debug, Clone, Copy)]
pub struct ChainCursor<'a> {
    chain: &'a DotChain,
    index: usize,
}

impl<'a> ChainCursor<'a> {
    pub fn node(&self) -> &'a ChainNode {
        &self.chain.nodes[self.index]
    }

    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    pub fn is_variable(&self) -> bool {
        self.node().is_variable
    }

    pub fn is_method(&self) -> bool {
        self.node().is_method
    }

    pub fn is_array(&self) -> bool {
        self.node().is_array
    }

    pub fn indexes(&self) -> usize {
        self.node().indexes
    }

    /// The node to the left of the `.` that produced this one.
    pub fn parent(&self) -> Option<ChainCursor<'a>> {
        self.index.checked_sub(1).map(|index| ChainCursor {
            chain: self.chain,
            index,
        })
    }

    /// The node to the right of this one.
    pub fn child(&self) -> Option<ChainCursor<'a>> {
        let index = self.index + 1;
        (index < self.chain.nodes.len()).then_some(ChainCursor {
            chain: self.chain,
            index,
        })
    }
}

fn is_chain_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Parse the chain whose last character sits just before `end`
/// (a character column in `line`).
pub fn parse_dot_chain(line: &str, end: usize) -> DotChain {
    let chars: Vec<char> = line.chars().collect();
    let mut end = end.min(chars.len());
    let mut nodes = Vec::new();

    loop {
        let (node, parent_end) = scan_node(&chars, end);
        nodes.push(node);
        match parent_end {
            Some(next) => end = next,
            None => break,
        }
    }

    nodes.reverse();
    DotChain { nodes }
}

/// Scan one node ending before `end`. Returns the node and, when a `.`
/// precedes it, the end column of its parent.
fn scan_node(chars: &[char], end: usize) -> (ChainNode, Option<usize>) {
    let mut node = ChainNode::default();
    let mut pos = end;

    while pos > 0 && chars[pos - 1] == ']' {
        match matching_open(chars, pos - 1, '[', ']') {
            Some(open) => {
                node.is_array = true;
                node.indexes += 1;
                pos = open;
            }
            None => return (node, None),
        }
    }

    if pos > 0 && chars[pos - 1] == ')' {
        match matching_open(chars, pos - 1, '(', ')') {
            Some(open) => {
                node.is_method = true;
                pos = open;
            }
            None => return (node, None),
        }
    }
    node.is_variable = !node.is_method;

    let name_end = pos;
    while pos > 0 && is_chain_ident_char(chars[pos - 1]) {
        pos -= 1;
    }
    node.name = chars[pos..name_end].iter().collect();

    let parent_end = (pos > 0 && chars[pos - 1] == '.').then(|| pos - 1);
    (node, parent_end)
}

/// Index of the `open` character matching the `close` at `close_at`.
fn matching_open(chars: &[char], close_at: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for idx in (0..=close_at).rev() {
        let c = chars[idx];
        if c == close {
            depth += 1;
        } else if c == open {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}
