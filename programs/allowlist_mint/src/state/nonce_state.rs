use anchor_lang::prelude::*;

/**
 * Nonce state account
 *
 * This struct tracks the campaign counter for each owner, enabling automatic
 * nonce assignment for new mint controllers.
 *
 * Derivation: ["owner_nonce", owner]
 *
 * Lifecycle:
 * 1. Created on first controller creation (using init_if_needed)
 * 2. Updated with each new controller creation (nonce incremented)
 * 3. Persistent across multiple mint campaigns
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Increments with each controller creation
    /// - Ensures unique nonces for each owner's campaigns
    pub nonce: u32,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();
}
