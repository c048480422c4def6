use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_CONTRIBUTORS};
use crate::error::AllowlistMintError;

/// One contributor's share and withdrawal history.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContributorShare {
    /// Contributor wallet that may pull its entitlement
    pub address: Pubkey,
    /// Share of all received funds, in basis points
    pub share_bps: u16,
    /// Payment units already withdrawn by this contributor
    pub withdrawn: u64,
}

impl ContributorShare {
    /// Serialized size of one entry (pubkey + bps + withdrawn)
    pub const SIZE: usize = 32 + 2 + 8;
}

/// Instruction input for contributor configuration (address + basis points).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContributorInput {
    pub address: Pubkey,
    pub share_bps: u16,
}

/**
 * Contributor ledger account
 *
 * Tracks the accumulating payment pool and per-contributor withdrawals for
 * one mint campaign. Entitlements are not booked per deposit; they are
 * recomputed from total_received at withdrawal time, so deposits stay O(1)
 * in the number of contributors and rounding happens once per withdrawal.
 *
 * Derivation: ["ledger", controller_key]
 *
 * Lifecycle:
 * 1. Created and configured once during Setup (shares must sum to 10000 bps)
 * 2. total_received grows with every claim payment and deposit
 * 3. withdrawn[c] grows with every withdrawal by contributor c
 * 4. Never closed - withdrawals outlive the mint itself
 */
#[account]
#[derive(Default, Debug)]
pub struct ContributorLedger {
    /// Total payment units ever credited to the pool
    pub total_received: u64,

    /// Configured contributors, immutable after configuration
    pub entries: Vec<ContributorShare>,
}

impl ContributorLedger {
    /// Space for discriminator + total + vec header + max entries.
    /// size_of is no use here since the entry list is heap-backed.
    pub const SPACE: usize = 8 + 8 + 4 + MAX_CONTRIBUTORS * ContributorShare::SIZE;

    /// Whether the one-time contributor configuration has happened.
    pub fn is_configured(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Validates a proposed contributor configuration.
    ///
    /// The list must be non-empty, fit the account, name each address at
    /// most once, and the shares must sum to exactly 10000 basis points.
    pub fn validate_shares(inputs: &[ContributorInput]) -> Result<()> {
        require!(
            !inputs.is_empty() && inputs.len() <= MAX_CONTRIBUTORS,
            AllowlistMintError::TooManyContributors
        );

        let mut share_sum: u64 = 0;
        for (i, input) in inputs.iter().enumerate() {
            require!(
                !inputs[..i].iter().any(|prior| prior.address == input.address),
                AllowlistMintError::DuplicateContributor
            );
            share_sum = share_sum
                .checked_add(u64::from(input.share_bps))
                .ok_or(AllowlistMintError::ArithmeticOverflow)?;
        }

        require!(
            share_sum == BPS_DENOMINATOR,
            AllowlistMintError::InvalidShareTotal
        );
        Ok(())
    }

    /// Installs the final contributor set. One-time; the caller gates on
    /// is_configured and the Setup phase.
    pub fn configure(&mut self, inputs: &[ContributorInput]) -> Result<()> {
        Self::validate_shares(inputs)?;
        self.entries = inputs
            .iter()
            .map(|input| ContributorShare {
                address: input.address,
                share_bps: input.share_bps,
                withdrawn: 0,
            })
            .collect();
        Ok(())
    }

    /// Credits a new inflow to the pool.
    pub fn receive(&mut self, amount: u64) -> Result<()> {
        self.total_received = self
            .total_received
            .checked_add(amount)
            .ok_or(AllowlistMintError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Lifetime entitlement for a share: floor(total_received * bps / 10000).
    ///
    /// The widening to u128 makes the product overflow-free for any u64
    /// pool and any bps <= 10000, and the result always fits back in u64.
    fn entitlement(&self, share_bps: u16) -> u64 {
        let gross = u128::from(self.total_received) * u128::from(share_bps)
            / u128::from(BPS_DENOMINATOR);
        gross as u64
    }

    /// Payment units the contributor could withdraw right now.
    pub fn owed(&self, contributor: &Pubkey) -> Result<u64> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.address == *contributor)
            .ok_or(AllowlistMintError::UnknownContributor)?;
        let owed = self
            .entitlement(entry.share_bps)
            .checked_sub(entry.withdrawn)
            .ok_or(AllowlistMintError::ArithmeticOverflow)?;
        Ok(owed)
    }

    /// Books a withdrawal of everything currently owed and returns the
    /// amount. The ledger update happens here, before the caller moves any
    /// tokens, so a failed transfer can never be replayed into a second
    /// withdrawal.
    pub fn record_withdrawal(&mut self, contributor: &Pubkey) -> Result<u64> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.address == *contributor)
            .ok_or(AllowlistMintError::UnknownContributor)?;

        let entitlement = self.entitlement(self.entries[position].share_bps);
        let entry = &mut self.entries[position];
        let amount = entitlement
            .checked_sub(entry.withdrawn)
            .ok_or(AllowlistMintError::ArithmeticOverflow)?;
        require!(amount > 0, AllowlistMintError::NothingOwed);

        entry.withdrawn = entitlement;
        Ok(amount)
    }

    /// Sum of everything still owed across all contributors.
    ///
    /// The difference between the treasury balance and this sum is the
    /// basis-point rounding residue, at most entries.len() - 1 units.
    pub fn outstanding(&self) -> Result<u64> {
        let mut sum: u64 = 0;
        for entry in &self.entries {
            let owed = self
                .entitlement(entry.share_bps)
                .checked_sub(entry.withdrawn)
                .ok_or(AllowlistMintError::ArithmeticOverflow)?;
            sum = sum
                .checked_add(owed)
                .ok_or(AllowlistMintError::ArithmeticOverflow)?;
        }
        Ok(sum)
    }
}
