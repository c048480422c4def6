use anchor_lang::prelude::*;

/// Lifecycle phase of a mint campaign.
///
/// `Setup` accepts the one-time configuration (allowlist root, contributor
/// shares). `Active` accepts claims and deposits. `Closed` is terminal:
/// no further claims, but contributor withdrawals remain available.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MintPhase {
    #[default]
    Setup,
    Active,
    Closed,
}

/**
 * Main mint controller state account
 *
 * This struct represents the core state of an allowlist-gated mint campaign.
 * It stores the allowlist commitment, the phase machine, and the vault and
 * treasury addresses the campaign operates on.
 *
 * Derivation: ["minter", asset_mint, owner, nonce]
 *
 * Lifecycle:
 * 1. Created during create_minter instruction (phase = Setup)
 * 2. Configured with allowlist root and contributor shares during Setup
 * 3. Activated by the operator (phase = Active)
 * 4. Updated during claims (claimed_count / total_allocated increment)
 * 5. Closed explicitly by the operator, or automatically once every
 *    eligibility index has been claimed
 */
#[account]
#[derive(Default, Debug)]
pub struct MintController {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Nonce number for this controller
    /// - Allows multiple mint campaigns for the same asset/owner pair
    pub nonce: u32,

    /// Owner of the campaign
    /// - Funds the asset vault, configures contributors, reclaims leftovers
    pub owner: Pubkey,

    /// Operator who can manage the campaign
    /// - Can set the allowlist root, activate and close the mint
    pub operator: Pubkey,

    /// Mint of the asset being distributed to claimants
    pub asset_mint: Pubkey,

    /// Asset vault account address
    /// - PDA that holds the asset units to be distributed
    /// - Controlled by the controller PDA
    /// - Derived from: ["vault", controller_key]
    pub asset_vault: Pubkey,

    /// Mint of the payment token claimants pay with
    pub payment_mint: Pubkey,

    /// Treasury account address
    /// - PDA that accumulates claim payments and deposits
    /// - Controlled by the controller PDA
    /// - Derived from: ["treasury", controller_key]
    pub treasury: Pubkey,

    /// Current lifecycle phase
    pub phase: MintPhase,

    /// Merkle root committing to the eligibility list
    /// - 32-byte hash, set once by the operator during Setup
    pub allowlist_root: [u8; 32],

    /// Number of entries in the committed eligibility list
    /// - Fixes the expected proof length for claims
    pub leaf_count: u32,

    /// Number of eligibility indices claimed so far
    /// - The campaign closes itself when this reaches leaf_count
    pub claimed_count: u32,

    /// Payment units charged per allocated asset unit
    /// - A claim for allocation N costs N * mint_price
    pub mint_price: u64,

    /// Asset units deposited into the vault at creation
    pub initial_allocation: u64,

    /// Total asset units handed out across all claims
    pub total_allocated: u64,
}

impl MintController {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<MintController>();
}
