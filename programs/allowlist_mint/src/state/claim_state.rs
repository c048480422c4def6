use anchor_lang::prelude::*;

/**
 * Individual claim record account
 *
 * This struct marks one eligibility index as claimed and keeps the verified
 * entry alongside it for off-chain queries. One record exists per index;
 * the PDA derivation makes the index itself the exclusivity key, so a
 * second claim for the same index lands on the same account and is
 * rejected by the claimed flag.
 *
 * Derivation: ["claim", controller_key, index_le_bytes]
 *
 * Lifecycle:
 * 1. Created on claim (using init_if_needed)
 * 2. Never modified again - a successful claim is irrevocable
 * 3. Can be closed by the beneficiary after the mint closes, for rent
 *    reclamation
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Whether this eligibility index has been claimed
    /// - Freshly initialized records start false
    pub claimed: bool,

    /// Eligibility index this record covers
    pub index: u32,

    /// Beneficiary that proved membership and claimed
    pub beneficiary: Pubkey,

    /// Asset units allocated by the claimed entry
    pub allocation: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}
