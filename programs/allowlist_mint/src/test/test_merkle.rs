use anchor_lang::prelude::*;
use std::str::FromStr;

use crate::merkle::{hash_leaf, proof_depth, verify, AllowlistEntry, AllowlistTree};

fn fixture_entries() -> Vec<AllowlistEntry> {
    vec![
        AllowlistEntry {
            index: 0,
            beneficiary: Pubkey::from_str("GVdNb2CuFiPc2WmhC9sD6XdvPUW9eMKCxoYYdbbQdmXJ").unwrap(),
            allocation: 1000,
        },
        AllowlistEntry {
            index: 1,
            beneficiary: Pubkey::from_str("3pGNmzUK2CYeyyGJwAQn79hm4aXQS7AXtWroLdUf7NMB").unwrap(),
            allocation: 2000,
        },
        AllowlistEntry {
            index: 2,
            beneficiary: Pubkey::from_str("2Y2pwkWd1HFjSY2a6d94VfjZxEWgyGDpmB5PqLYH8PhE").unwrap(),
            allocation: 3000,
        },
        AllowlistEntry {
            index: 3,
            beneficiary: Pubkey::from_str("AkqUnHaEgsJPEJh7sHDejjUeoekaZqyzcZsJWC89qMWX").unwrap(),
            allocation: 4000,
        },
    ]
}

fn synthetic_entries(count: u32) -> Vec<AllowlistEntry> {
    (0..count)
        .map(|index| AllowlistEntry {
            index,
            beneficiary: Pubkey::new_unique(),
            allocation: u64::from(index) * 10 + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proof_round_trip() {
        let entries = fixture_entries();
        let tree = AllowlistTree::new(&entries).unwrap();
        let root = tree.root();

        for entry in &entries {
            let leaf = hash_leaf(entry.index, &entry.beneficiary, entry.allocation);
            let proof = tree.proof(entry.index).expect("Failed to get proof");

            assert_eq!(proof.len(), proof_depth(tree.leaf_count()));
            assert!(
                verify(&proof, root, leaf),
                "Proof verification failed for index {}",
                entry.index
            );
        }
    }

    #[test]
    fn test_round_trip_all_small_sizes() {
        // Covers the power-of-two boundaries and every odd-level shape
        // up to two full levels beyond 32
        for count in 1..=33u32 {
            let entries = synthetic_entries(count);
            let tree = AllowlistTree::new(&entries).unwrap();
            let root = tree.root();

            for entry in &entries {
                let leaf = hash_leaf(entry.index, &entry.beneficiary, entry.allocation);
                let proof = tree.proof(entry.index).unwrap();
                assert_eq!(proof.len(), proof_depth(count));
                assert!(
                    verify(&proof, root, leaf),
                    "round trip failed at size {} index {}",
                    count,
                    entry.index
                );
            }
        }
    }

    #[test]
    fn test_round_trip_large_tree() {
        let entries = synthetic_entries(1000);
        let tree = AllowlistTree::new(&entries).unwrap();
        let root = tree.root();

        assert_eq!(proof_depth(1000), 10);
        for index in [0u32, 1, 499, 511, 512, 998, 999] {
            let entry = &entries[index as usize];
            let leaf = hash_leaf(entry.index, &entry.beneficiary, entry.allocation);
            let proof = tree.proof(index).unwrap();
            assert!(verify(&proof, root, leaf), "failed at index {}", index);
        }
    }

    #[test]
    fn test_proof_rejects_other_leaves() {
        let entries = fixture_entries();
        let tree = AllowlistTree::new(&entries).unwrap();
        let root = tree.root();

        // A proof is only good for its own leaf
        for entry in &entries {
            let proof = tree.proof(entry.index).unwrap();
            for other in &entries {
                if other.index == entry.index {
                    continue;
                }
                let other_leaf = hash_leaf(other.index, &other.beneficiary, other.allocation);
                assert!(
                    !verify(&proof, root, other_leaf),
                    "proof for index {} verified leaf {}",
                    entry.index,
                    other.index
                );
            }
        }
    }

    #[test]
    fn test_wrong_entry_fields_fail() {
        let entries = fixture_entries();
        let tree = AllowlistTree::new(&entries).unwrap();
        let root = tree.root();
        let proof = tree.proof(0).unwrap();
        let entry = &entries[0];

        // Wrong beneficiary
        let foreign = hash_leaf(0, &Pubkey::new_unique(), entry.allocation);
        assert!(!verify(&proof, root, foreign));

        // Inflated allocation
        let inflated = hash_leaf(0, &entry.beneficiary, entry.allocation + 1);
        assert!(!verify(&proof, root, inflated));

        // Entry claimed under a different index
        let reindexed = hash_leaf(1, &entry.beneficiary, entry.allocation);
        assert!(!verify(&proof, root, reindexed));
    }

    #[test]
    fn test_tampered_proof_fails() {
        let entries = fixture_entries();
        let tree = AllowlistTree::new(&entries).unwrap();
        let root = tree.root();
        let entry = &entries[0];
        let leaf = hash_leaf(entry.index, &entry.beneficiary, entry.allocation);
        let proof = tree.proof(0).unwrap();

        // Flip one bit of each proof element in turn
        for position in 0..proof.len() {
            for bit in [0u8, 3, 7] {
                let mut tampered = proof.clone();
                tampered[position][0] ^= 1 << bit;
                assert!(
                    !verify(&tampered, root, leaf),
                    "tampered bit {} of element {} still verified",
                    bit,
                    position
                );
            }
        }

        // Truncated and extended proofs must also fail
        let truncated = &proof[..proof.len() - 1];
        assert!(!verify(truncated, root, leaf));

        let mut extended = proof.clone();
        extended.push([7u8; 32]);
        assert!(!verify(&extended, root, leaf));
    }

    #[test]
    fn test_single_entry_tree() {
        let entries = synthetic_entries(1);
        let tree = AllowlistTree::new(&entries).unwrap();

        let proof = tree.proof(0).expect("Failed to get proof for single entry");
        assert_eq!(proof.len(), 0, "Single entry should have empty proof");

        let leaf = hash_leaf(0, &entries[0].beneficiary, entries[0].allocation);
        assert_eq!(tree.root(), leaf, "Single entry root is its own leaf");
        assert!(verify(&proof, tree.root(), leaf));
    }

    #[test]
    fn test_builder_rejects_bad_lists() {
        assert!(AllowlistTree::new(&[]).is_err(), "empty list must be rejected");

        // Indices must match list positions
        let mut entries = synthetic_entries(3);
        entries[1].index = 5;
        assert!(AllowlistTree::new(&entries).is_err());

        // Out-of-range proof requests error instead of panicking
        let tree = AllowlistTree::new(&synthetic_entries(4)).unwrap();
        assert!(tree.proof(10).is_err());
    }

    #[test]
    fn test_proof_depth_values() {
        assert_eq!(proof_depth(1), 0);
        assert_eq!(proof_depth(2), 1);
        assert_eq!(proof_depth(3), 2);
        assert_eq!(proof_depth(4), 2);
        assert_eq!(proof_depth(5), 3);
        assert_eq!(proof_depth(8), 3);
        assert_eq!(proof_depth(9), 4);
        assert_eq!(proof_depth(1000), 10);
        assert_eq!(proof_depth(1024), 10);
        assert_eq!(proof_depth(1025), 11);
    }

    #[test]
    fn test_leaf_encoding_is_positional() {
        // The three fixed-width fields must not collide across positions
        let key = Pubkey::new_unique();
        let a = hash_leaf(1, &key, 2);
        let b = hash_leaf(2, &key, 1);
        assert_ne!(a, b);

        let c = hash_leaf(0, &key, 0);
        let d = hash_leaf(0, &key, u64::MAX);
        assert_ne!(c, d);
    }
}
