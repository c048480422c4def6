use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the allowlist
 * mint program. These constants control share accounting, tree bounds, and
 * PDA derivation.
 */

#[constant]
/// ===== SHARE ACCOUNTING CONSTANTS =====

/// Denominator for basis-point share arithmetic
/// - Contributor shares must sum to exactly this value at configuration
/// - 1 bps = 1/10000 of every payment unit received
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Maximum number of revenue-share contributors per campaign
/// - Bounds the ledger account size at creation
pub const MAX_CONTRIBUTORS: usize = 10;

/// ===== TREE BOUND CONSTANTS =====

/// Maximum supported allowlist tree depth
/// - Bounds proof length checks; depth 24 covers 16M+ eligibility entries
pub const MAX_TREE_DEPTH: usize = 24;

/// ===== PDA SEED CONSTANTS =====

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Creates one campaign counter per owner
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for mint controller PDA derivation
/// - Used in: ["minter", asset_mint, owner, nonce]
/// - Creates unique controllers for each (asset, owner, nonce) combination
pub const MINTER_SEED: &str = "minter";

/// Seed for asset vault PDA derivation
/// - Used in: ["vault", controller_key]
/// - The vault holds the asset units handed out to claimants
pub const VAULT_SEED: &str = "vault";

/// Seed for treasury PDA derivation
/// - Used in: ["treasury", controller_key]
/// - The treasury accumulates claim payments and deposits
pub const TREASURY_SEED: &str = "treasury";

/// Seed for contributor ledger PDA derivation
/// - Used in: ["ledger", controller_key]
pub const LEDGER_SEED: &str = "ledger";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", controller_key, index_le_bytes]
/// - One record per eligibility index enforces at-most-one claim
pub const CLAIM_SEED: &str = "claim";
