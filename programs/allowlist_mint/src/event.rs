use anchor_lang::prelude::*;

/// Event emitted when a new mint controller is created
#[event]
pub struct MinterCreated {
    /// The controller account public key
    pub controller: Pubkey,
    /// Nonce of the controller
    pub nonce: u32,
    /// Owner of the campaign
    pub owner: Pubkey,
    /// Operator of the campaign
    pub operator: Pubkey,
    /// Asset mint being distributed
    pub asset_mint: Pubkey,
    /// Payment mint claimants pay with
    pub payment_mint: Pubkey,
    /// Asset units deposited into the vault
    pub initial_allocation: u64,
    /// Payment units charged per allocated asset unit
    pub mint_price: u64,
}

/// Event emitted when the allowlist root is published
#[event]
pub struct AllowlistRootSet {
    /// The controller account public key
    pub controller: Pubkey,
    /// Operator who set the root
    pub operator: Pubkey,
    /// The allowlist merkle root
    pub root: [u8; 32],
    /// Number of committed eligibility entries
    pub leaf_count: u32,
}

/// Event emitted when the contributor set is configured
#[event]
pub struct ContributorsConfigured {
    /// The controller account public key
    pub controller: Pubkey,
    /// Number of configured contributors
    pub contributor_count: u8,
}

/// Event emitted when the mint transitions Setup -> Active
#[event]
pub struct MintingActivated {
    /// The controller account public key
    pub controller: Pubkey,
    /// Operator who activated the mint
    pub operator: Pubkey,
}

/// Event emitted when an eligibility entry is claimed
#[event]
pub struct AllocationClaimed {
    /// The controller account public key
    pub controller: Pubkey,
    /// Eligibility index that was claimed
    pub index: u32,
    /// Beneficiary that claimed
    pub beneficiary: Pubkey,
    /// Asset units transferred to the beneficiary
    pub allocation: u64,
    /// Payment units forwarded to the treasury
    pub payment: u64,
    /// Indices claimed so far across the campaign
    pub claimed_count: u32,
}

/// Event emitted when funds are deposited outside of a claim
#[event]
pub struct FundsDeposited {
    /// The controller account public key
    pub controller: Pubkey,
    /// Account that paid the deposit
    pub payer: Pubkey,
    /// Payment units credited to the pool
    pub amount: u64,
    /// Pool total after this deposit
    pub total_received: u64,
}

/// Event emitted when a contributor withdraws its entitlement
#[event]
pub struct ContributorWithdrawal {
    /// The controller account public key
    pub controller: Pubkey,
    /// Contributor that withdrew
    pub contributor: Pubkey,
    /// Payment units transferred out
    pub amount: u64,
}

/// Event emitted when the mint transitions Active -> Closed
#[event]
pub struct MintingClosed {
    /// The controller account public key
    pub controller: Pubkey,
    /// True when closing was triggered by claiming every index
    pub exhausted: bool,
    /// Indices claimed over the campaign lifetime
    pub claimed_count: u32,
}

/// Event emitted when the owner reclaims unclaimed asset units
#[event]
pub struct RemainingAssetsWithdrawn {
    /// The controller account public key
    pub controller: Pubkey,
    /// Owner who reclaimed the assets
    pub owner: Pubkey,
    /// Asset units withdrawn from the vault
    pub amount: u64,
}

/// Event emitted when rounding dust is swept at teardown
#[event]
pub struct DustSwept {
    /// The controller account public key
    pub controller: Pubkey,
    /// Owner who swept the dust
    pub owner: Pubkey,
    /// Payment units swept
    pub amount: u64,
}

/// Event emitted when a ClaimRecord account is closed
#[event]
pub struct ClaimRecordClosed {
    /// The controller account public key
    pub controller: Pubkey,
    /// Beneficiary who closed the record
    pub beneficiary: Pubkey,
    /// Eligibility index the record covered
    pub index: u32,
}
