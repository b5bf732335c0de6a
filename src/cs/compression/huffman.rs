use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use bitvec::prelude::{BitSlice, BitVec, Msb0};
use log::{debug, trace};

use crate::cs::compression::min_heap::MinHeap;
use crate::cs::compression::Result;
use crate::cs::error::Error;

/// Packed bitstream type used by [`CodeTree::encode_bits`] and [`CodeTree::decode_bits`].
pub type Bits = BitVec<u8, Msb0>;

/// A node of the code tree, and the element type of the merge heap.
#[derive(Debug, Clone)]
pub enum Entry {
    /// A single input symbol and its weight.
    Leaf { symbol: char, weight: u64 },
    /// A merged node. `weight` is the sum of both children, `seq` is the merge
    /// step that created it and only breaks ties between internal nodes.
    Internal {
        weight: u64,
        seq: u64,
        left: Box<Entry>,
        right: Box<Entry>,
    },
}

impl Entry {
    /// Returns the weight of the node.
    pub fn weight(&self) -> u64 {
        match self {
            Entry::Leaf { weight, .. } => *weight,
            Entry::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Entry::Leaf { .. })
    }
}

/// Extraction order: lower weight first; at equal weight leaves before internal
/// nodes; leaves by symbol; internal nodes by creation order.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight()
            .cmp(&other.weight())
            .then_with(|| match (self, other) {
                (Entry::Leaf { symbol: a, .. }, Entry::Leaf { symbol: b, .. }) => a.cmp(b),
                (Entry::Leaf { .. }, Entry::Internal { .. }) => Ordering::Less,
                (Entry::Internal { .. }, Entry::Leaf { .. }) => Ordering::Greater,
                (Entry::Internal { seq: a, .. }, Entry::Internal { seq: b, .. }) => a.cmp(b),
            })
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// A prefix-free binary code built from symbol weights, together with the tree
/// used to decode it.
///
/// An empty alphabet produces an empty tree: nothing encodes and every decode
/// yields the empty string. A single-symbol alphabet assigns that symbol the
/// codeword `"0"`.
#[derive(Debug, Clone)]
pub struct CodeTree {
    root: Option<Entry>,
    table: HashMap<char, String>,
}

impl CodeTree {
    /// Builds the code from `(symbol, weight)` pairs.
    ///
    /// # Errors
    /// * [`Error::DuplicateSymbol`] if a symbol appears twice.
    /// * [`Error::WeightOverflow`] if the weights do not sum within `u64`.
    ///
    /// # Complexity
    /// O(k log k) for k symbols.
    pub fn from_pairs(pairs: &[(char, u64)]) -> Result<Self> {
        let mut seen = HashSet::with_capacity(pairs.len());
        let mut total: u64 = 0;
        for &(symbol, weight) in pairs {
            if !seen.insert(symbol) {
                return Err(Error::DuplicateSymbol(symbol));
            }
            total = total.checked_add(weight).ok_or(Error::WeightOverflow)?;
        }

        let root = build_tree(pairs);
        let table = root.as_ref().map(build_code_table).unwrap_or_default();
        Ok(CodeTree { root, table })
    }

    /// Builds the code from a string of distinct letters and one signed weight
    /// per letter, in the same order.
    ///
    /// # Errors
    /// * [`Error::LengthMismatch`] if the counts differ.
    /// * [`Error::NegativeWeight`] for any weight below zero.
    /// * Anything [`CodeTree::from_pairs`] rejects.
    ///
    /// # Examples
    /// ```
    /// use prefix_codes::compression::CodeTree;
    ///
    /// let tree = CodeTree::from_letters("ABCDE", &[39, 21, 19, 12, 9]).unwrap();
    /// assert_eq!(tree.decode("101100000111").unwrap(), "DECBA");
    /// ```
    pub fn from_letters(letters: &str, weights: &[i64]) -> Result<Self> {
        let symbols: Vec<char> = letters.chars().collect();
        if symbols.len() != weights.len() {
            return Err(Error::LengthMismatch {
                symbols: symbols.len(),
                weights: weights.len(),
            });
        }

        let pairs = symbols
            .iter()
            .zip(weights)
            .map(|(&symbol, &weight)| {
                u64::try_from(weight)
                    .map(|w| (symbol, w))
                    .map_err(|_| Error::NegativeWeight { symbol, weight })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_pairs(&pairs)
    }

    /// Builds the code using each character's frequency in `text` as its weight.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut pairs: Vec<(char, u64)> = build_frequency_table(text)
            .into_iter()
            .map(|(ch, count)| (ch, count as u64))
            .collect();
        pairs.sort_unstable();
        Self::from_pairs(&pairs)
    }

    /// The root of the tree, or `None` for an empty alphabet.
    pub fn root(&self) -> Option<&Entry> {
        self.root.as_ref()
    }

    /// Symbol to codeword mapping.
    pub fn code_table(&self) -> &HashMap<char, String> {
        &self.table
    }

    pub fn codeword(&self, symbol: char) -> Option<&str> {
        self.table.get(&symbol).map(String::as_str)
    }

    pub fn symbol_count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Leaves in left-to-right order as `(symbol, weight)`.
    pub fn leaves(&self) -> Vec<(char, u64)> {
        let mut out = Vec::with_capacity(self.table.len());
        let mut stack: Vec<&Entry> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            match node {
                Entry::Leaf { symbol, weight } => out.push((*symbol, *weight)),
                Entry::Internal { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }
        out
    }

    /// Sum of `weight * codeword length` over all symbols.
    pub fn weighted_path_length(&self) -> u128 {
        self.leaves()
            .into_iter()
            .map(|(symbol, weight)| {
                let depth = self.table.get(&symbol).map_or(0, String::len);
                weight as u128 * depth as u128
            })
            .sum()
    }

    /// Replaces each character of `text` with its codeword.
    ///
    /// # Errors
    /// [`Error::UnknownSymbol`] for a character outside the alphabet.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut out = String::new();
        for ch in text.chars() {
            out.push_str(self.lookup(ch)?);
        }
        Ok(out)
    }

    /// Like [`CodeTree::encode`], packing the codewords into bits.
    pub fn encode_bits(&self, text: &str) -> Result<Bits> {
        let mut out = Bits::new();
        for ch in text.chars() {
            out.extend(self.lookup(ch)?.bytes().map(|b| b == b'1'));
        }
        Ok(out)
    }

    /// Decodes a string of `'0'` and `'1'` characters.
    ///
    /// Walks left on `'0'` and right on `'1'`, emitting a symbol and returning to
    /// the root at every leaf.
    ///
    /// # Errors
    /// * [`Error::MalformedBit`] for any other character.
    /// * [`Error::IncompleteCode`] if the input stops inside a codeword.
    /// * [`Error::InvalidCode`] for a `'1'` given to a single-symbol code.
    pub fn decode(&self, bits: &str) -> Result<String> {
        let bits = bits.chars().enumerate().map(|(position, found)| match found {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(Error::MalformedBit { position, found }),
        });
        self.decode_iter(bits)
    }

    /// Decodes packed bits. Same rules as [`CodeTree::decode`].
    pub fn decode_bits(&self, bits: &BitSlice<u8, Msb0>) -> Result<String> {
        self.decode_iter(bits.iter().by_vals().map(Ok))
    }

    fn lookup(&self, ch: char) -> Result<&str> {
        self.table
            .get(&ch)
            .map(String::as_str)
            .ok_or(Error::UnknownSymbol(ch))
    }

    fn decode_iter<I>(&self, bits: I) -> Result<String>
    where
        I: Iterator<Item = Result<bool>>,
    {
        let Some(root) = self.root.as_ref() else {
            return Ok(String::new());
        };
        let mut result = String::new();

        // Single symbol: its codeword is "0".
        if let Entry::Leaf { symbol, .. } = root {
            for (position, bit) in bits.enumerate() {
                if bit? {
                    return Err(Error::InvalidCode { position });
                }
                result.push(*symbol);
            }
            return Ok(result);
        }

        let mut current: &Entry = root;
        let mut trailing = 0;
        for bit in bits {
            let bit = bit?;
            if let Entry::Internal { left, right, .. } = current {
                current = if bit { right.as_ref() } else { left.as_ref() };
                trailing += 1;
            }
            if let Entry::Leaf { symbol, .. } = current {
                result.push(*symbol);
                current = root;
                trailing = 0;
            }
        }

        if trailing > 0 {
            return Err(Error::IncompleteCode { trailing });
        }
        Ok(result)
    }
}

/// Build a frequency table mapping each character in `input` to its frequency.
pub fn build_frequency_table(input: &str) -> HashMap<char, usize> {
    let mut freq = HashMap::new();
    for ch in input.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}

/// Merges the two lightest entries until one remains.
///
/// The caller guarantees the weights sum within `u64`, so merged weights cannot
/// overflow.
fn build_tree(pairs: &[(char, u64)]) -> Option<Entry> {
    let mut heap: MinHeap<Entry> = pairs
        .iter()
        .map(|&(symbol, weight)| Entry::Leaf { symbol, weight })
        .collect();

    let mut next_seq: u64 = 0;
    while heap.len() > 1 {
        let mut two = heap.extract_two_minimum().into_iter();
        let (Some(mut left), Some(mut right)) = (two.next(), two.next()) else {
            break;
        };
        if left.weight() > right.weight() {
            std::mem::swap(&mut left, &mut right);
        }
        let weight = left.weight() + right.weight();
        trace!(
            "merge #{}: {} + {} -> {}",
            next_seq,
            left.weight(),
            right.weight(),
            weight
        );
        heap.insert(Entry::Internal {
            weight,
            seq: next_seq,
            left: Box::new(left),
            right: Box::new(right),
        });
        next_seq += 1;
    }

    debug!(
        "built code tree for {} symbols in {} merges",
        pairs.len(),
        next_seq
    );
    heap.extract_min()
}

/// Recursively build the code table mapping characters to their codewords.
///
/// If the tree consists of a single leaf, the code "0" is assigned.
fn build_code_table(node: &Entry) -> HashMap<char, String> {
    let mut table = HashMap::new();
    build_code_table_helper(node, String::new(), &mut table);
    table
}

fn build_code_table_helper(node: &Entry, prefix: String, table: &mut HashMap<char, String>) {
    match node {
        Entry::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix
            };
            table.insert(*symbol, code);
        }
        Entry::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            build_code_table_helper(left, left_prefix, table);
            let mut right_prefix = prefix;
            right_prefix.push('1');
            build_code_table_helper(right, right_prefix, table);
        }
    }
}

/// Convenience function: builds the code from the frequencies in `input` and
/// returns (encoded bit string, code tree).
pub fn huffman_encode(input: &str) -> Result<(String, CodeTree)> {
    let tree = CodeTree::from_text(input)?;
    let encoded = tree.encode(input)?;
    Ok((encoded, tree))
}

/// Convenience function: decodes an encoded bit string using the provided tree.
pub fn huffman_decode(encoded: &str, tree: &CodeTree) -> Result<String> {
    tree.decode(encoded)
}
