use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::error::AllowlistMintError;

/**
 * Allowlist merkle tree
 *
 * One fixed convention is applied on both sides of the commitment:
 * - Leaf: sha256 over the fixed-width encoding of an eligibility entry,
 *   index (4 bytes LE) then beneficiary (32 bytes) then allocation
 *   (8 bytes LE). Fixed widths keep the preimage unambiguous.
 * - Interior node: sha256 over the two children, lexicographically smaller
 *   hash first. Sorted pairing lets verification fold the proof without
 *   tracking left/right positions.
 * - Odd level: the trailing node is paired with itself.
 *
 * The builder and proof generator live in this module rather than a client
 * repository so the off-band setup tooling links the exact hashing rules
 * the claim instruction verifies against.
 */

/// One entry of the eligibility list committed to by the allowlist root.
///
/// Entry `i` of the list must carry `index == i`; the builder rejects
/// anything else, which rules out duplicate indices structurally.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllowlistEntry {
    pub index: u32,
    pub beneficiary: Pubkey,
    pub allocation: u64,
}

/// Hashes one eligibility entry into its leaf.
pub fn hash_leaf(index: u32, beneficiary: &Pubkey, allocation: u64) -> [u8; 32] {
    hashv(&[
        &index.to_le_bytes(),
        &beneficiary.to_bytes(),
        &allocation.to_le_bytes(),
    ])
    .to_bytes()
}

/// Hashes two sibling nodes, smaller hash first.
fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    if left <= right {
        hashv(&[left, right])
    } else {
        hashv(&[right, left])
    }
    .to_bytes()
}

/// Recomputes the root by folding the leaf with each proof element and
/// compares it against the expected root.
///
/// A wrong answer is a `false`, never an error; the fold is a pure
/// function of its inputs.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed = leaf;
    for sibling in proof {
        computed = hash_pair(&computed, sibling);
    }
    computed == root
}

/// Number of levels above the leaf layer for a tree of `leaf_count`
/// entries. Every proof the tree produces has exactly this length, so the
/// claim instruction can reject malformed proofs before hashing anything.
pub fn proof_depth(leaf_count: u32) -> usize {
    let mut depth = 0;
    let mut level_len = leaf_count as usize;
    while level_len > 1 {
        level_len = level_len.div_ceil(2);
        depth += 1;
    }
    depth
}

/// Merkle tree over a complete eligibility list.
///
/// All layers are kept in a single flat vector, leaves first, root last.
/// The tree is built once and never mutated; proofs are read out of the
/// stored layers.
pub struct AllowlistTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl AllowlistTree {
    /// Builds the tree over the full eligibility list.
    pub fn new(entries: &[AllowlistEntry]) -> Result<Self> {
        require!(!entries.is_empty(), AllowlistMintError::EmptyAllowlist);
        for (position, entry) in entries.iter().enumerate() {
            require!(
                entry.index as usize == position,
                AllowlistMintError::MisnumberedAllowlist
            );
        }

        let nodes = entries
            .iter()
            .map(|entry| hash_leaf(entry.index, &entry.beneficiary, entry.allocation))
            .collect();

        let mut tree = AllowlistTree {
            nodes,
            leaf_count: entries.len(),
        };
        tree.build_levels();
        Ok(tree)
    }

    fn build_levels(&mut self) {
        let mut prev_level_start = 0;
        let mut prev_level_len = self.leaf_count;
        let mut level_len = Self::next_level_len(self.leaf_count);

        while level_len > 0 {
            for i in 0..level_len {
                let left = self.nodes[prev_level_start + 2 * i];
                let right = if 2 * i + 1 < prev_level_len {
                    self.nodes[prev_level_start + 2 * i + 1]
                } else {
                    // Odd level: pair the trailing node with itself
                    left
                };
                self.nodes.push(hash_pair(&left, &right));
            }

            prev_level_start += prev_level_len;
            prev_level_len = level_len;
            level_len = Self::next_level_len(level_len);
        }
    }

    fn next_level_len(level_len: usize) -> usize {
        if level_len == 1 {
            0
        } else {
            level_len.div_ceil(2)
        }
    }

    /// The root hash committing to the whole list.
    pub fn root(&self) -> [u8; 32] {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of eligibility entries the tree commits to.
    pub fn leaf_count(&self) -> u32 {
        self.leaf_count as u32
    }

    /// Generates the sibling path for the leaf at `index`, walking the
    /// stored layers from bottom to top.
    pub fn proof(&self, index: u32) -> Result<Vec<[u8; 32]>> {
        require!(
            (index as usize) < self.leaf_count,
            AllowlistMintError::IndexOutOfRange
        );

        let mut proof = Vec::with_capacity(proof_depth(self.leaf_count as u32));
        let mut current_index = index as usize;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling_index = if current_index % 2 == 0 {
                // Trailing node of an odd level is its own sibling
                (current_index + 1).min(level_len - 1)
            } else {
                current_index - 1
            };
            proof.push(self.nodes[level_start + sibling_index]);

            current_index /= 2;
            level_start += level_len;
            level_len = Self::next_level_len(level_len);
        }

        Ok(proof)
    }
}
