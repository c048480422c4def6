use anchor_lang::prelude::*;

use crate::error::AllowlistMintError;
use crate::merkle::{hash_leaf, verify, AllowlistEntry, AllowlistTree};
use crate::state::{ClaimRecord, ContributorInput, ContributorLedger, MintPhase};

fn ledger_with(shares: &[(Pubkey, u16)]) -> ContributorLedger {
    let inputs: Vec<ContributorInput> = shares
        .iter()
        .map(|(address, share_bps)| ContributorInput {
            address: *address,
            share_bps: *share_bps,
        })
        .collect();

    let mut ledger = ContributorLedger::default();
    ledger.configure(&inputs).expect("configuration must pass");
    ledger
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_validation() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        // Shares short of 10000 bps
        let short = [
            ContributorInput { address: a, share_bps: 5000 },
            ContributorInput { address: b, share_bps: 4000 },
        ];
        assert_eq!(
            ContributorLedger::validate_shares(&short).unwrap_err(),
            AllowlistMintError::InvalidShareTotal.into()
        );

        // Shares past 10000 bps
        let long = [
            ContributorInput { address: a, share_bps: 9000 },
            ContributorInput { address: b, share_bps: 2000 },
        ];
        assert_eq!(
            ContributorLedger::validate_shares(&long).unwrap_err(),
            AllowlistMintError::InvalidShareTotal.into()
        );

        // Same address twice
        let duplicated = [
            ContributorInput { address: a, share_bps: 5000 },
            ContributorInput { address: a, share_bps: 5000 },
        ];
        assert_eq!(
            ContributorLedger::validate_shares(&duplicated).unwrap_err(),
            AllowlistMintError::DuplicateContributor.into()
        );

        // Empty list
        assert_eq!(
            ContributorLedger::validate_shares(&[]).unwrap_err(),
            AllowlistMintError::TooManyContributors.into()
        );

        // Exact total passes
        let exact = [
            ContributorInput { address: a, share_bps: 6000 },
            ContributorInput { address: b, share_bps: 4000 },
        ];
        assert!(ContributorLedger::validate_shares(&exact).is_ok());
    }

    #[test]
    fn test_owed_tracks_received_funds() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut ledger = ledger_with(&[(alice, 6000), (bob, 4000)]);

        assert_eq!(ledger.owed(&alice).unwrap(), 0);

        ledger.receive(1000).unwrap();
        assert_eq!(ledger.owed(&alice).unwrap(), 600);
        assert_eq!(ledger.owed(&bob).unwrap(), 400);

        // Deposits accumulate; entitlements are recomputed from the total
        ledger.receive(500).unwrap();
        assert_eq!(ledger.owed(&alice).unwrap(), 900);
        assert_eq!(ledger.owed(&bob).unwrap(), 600);

        assert_eq!(
            ledger.owed(&Pubkey::new_unique()).unwrap_err(),
            AllowlistMintError::UnknownContributor.into()
        );
    }

    #[test]
    fn test_no_double_withdrawal() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut ledger = ledger_with(&[(alice, 6000), (bob, 4000)]);

        ledger.receive(1000).unwrap();
        assert_eq!(ledger.record_withdrawal(&alice).unwrap(), 600);
        assert_eq!(ledger.owed(&alice).unwrap(), 0);

        // Nothing more owed until another inflow
        assert_eq!(
            ledger.record_withdrawal(&alice).unwrap_err(),
            AllowlistMintError::NothingOwed.into()
        );

        // Bob's entitlement is untouched by Alice's withdrawal
        assert_eq!(ledger.record_withdrawal(&bob).unwrap(), 400);

        // New inflow re-opens both entitlements
        ledger.receive(100).unwrap();
        assert_eq!(ledger.record_withdrawal(&alice).unwrap(), 60);
        assert_eq!(ledger.record_withdrawal(&bob).unwrap(), 40);
    }

    #[test]
    fn test_share_conservation_under_rounding() {
        let contributors: Vec<(Pubkey, u16)> = vec![
            (Pubkey::new_unique(), 3333),
            (Pubkey::new_unique(), 3333),
            (Pubkey::new_unique(), 3334),
        ];
        let mut ledger = ledger_with(&contributors);

        let mut total: u64 = 0;
        for amount in [1u64, 3, 7, 99, 1000, 12345, 1, 2] {
            ledger.receive(amount).unwrap();
            total += amount;

            let owed_sum: u64 = contributors
                .iter()
                .map(|(address, _)| ledger.owed(address).unwrap())
                .sum();

            assert!(owed_sum <= total, "owed {} exceeds received {}", owed_sum, total);
            assert!(
                total - owed_sum < contributors.len() as u64,
                "dust {} reached contributor count after receiving {}",
                total - owed_sum,
                total
            );
            assert_eq!(ledger.outstanding().unwrap(), owed_sum);
        }

        // Dust is not lost: drain everyone, then one more deposit makes the
        // remainder claimable again
        for (address, _) in &contributors {
            let _ = ledger.record_withdrawal(address);
        }
        ledger.receive(2).unwrap();
        let reopened: u64 = contributors
            .iter()
            .map(|(address, _)| ledger.owed(address).unwrap())
            .sum();
        assert!(reopened > 0);
    }

    #[test]
    fn test_single_contributor_gets_everything() {
        let solo = Pubkey::new_unique();
        let mut ledger = ledger_with(&[(solo, 10_000)]);

        ledger.receive(777).unwrap();
        assert_eq!(ledger.owed(&solo).unwrap(), 777);
        assert_eq!(ledger.outstanding().unwrap(), 777);
        assert_eq!(ledger.record_withdrawal(&solo).unwrap(), 777);
        assert_eq!(ledger.outstanding().unwrap(), 0);
    }

    #[test]
    fn test_receive_overflow_is_fatal() {
        let solo = Pubkey::new_unique();
        let mut ledger = ledger_with(&[(solo, 10_000)]);

        ledger.receive(u64::MAX).unwrap();
        assert_eq!(
            ledger.receive(1).unwrap_err(),
            AllowlistMintError::ArithmeticOverflow.into()
        );
    }

    #[test]
    fn test_configuration_is_one_time_state() {
        let mut ledger = ContributorLedger::default();
        assert!(!ledger.is_configured());

        ledger
            .configure(&[ContributorInput {
                address: Pubkey::new_unique(),
                share_bps: 10_000,
            }])
            .unwrap();
        assert!(ledger.is_configured());
    }

    #[test]
    fn test_claim_record_starts_unclaimed() {
        let record = ClaimRecord::default();
        assert!(!record.claimed);
        assert_eq!(record.allocation, 0);
    }

    #[test]
    fn test_phase_starts_in_setup() {
        assert_eq!(MintPhase::default(), MintPhase::Setup);
    }

    /// The full campaign walk-through: four eligibility entries with one
    /// unit each, a 60/40 contributor split, one claim, one deposit, one
    /// withdrawal.
    #[test]
    fn test_mint_campaign_scenario() {
        let entries: Vec<AllowlistEntry> = (0..4)
            .map(|index| AllowlistEntry {
                index,
                beneficiary: Pubkey::new_unique(),
                allocation: 1,
            })
            .collect();
        let tree = AllowlistTree::new(&entries).unwrap();
        let root = tree.root();

        // Claim index 2 with its own proof
        let claimant = entries[2].beneficiary;
        let proof = tree.proof(2).unwrap();
        let leaf = hash_leaf(2, &claimant, 1);
        assert!(verify(&proof, root, leaf));

        let mut record = ClaimRecord::default();
        assert!(!record.claimed);
        record.claimed = true;
        record.index = 2;
        record.beneficiary = claimant;
        record.allocation = 1;

        // A second claim for index 2 finds the record already claimed
        assert!(record.claimed);

        // Funds arrive and are split 60/40
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut ledger = ledger_with(&[(alice, 6000), (bob, 4000)]);
        ledger.receive(1000).unwrap();

        assert_eq!(ledger.owed(&alice).unwrap(), 600);
        assert_eq!(ledger.owed(&bob).unwrap(), 400);
        assert_eq!(ledger.record_withdrawal(&alice).unwrap(), 600);
        assert_eq!(ledger.owed(&alice).unwrap(), 0);
        assert_eq!(ledger.owed(&bob).unwrap(), 400);
    }
}
