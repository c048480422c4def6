use anchor_lang::prelude::*;

declare_id!("5D1Nd72NrEr6Jo2xnaeKDrkgwxczGjY7VqWKascARuBw");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod merkle;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::ContributorInput;

/**
 * Allowlist Mint Program
 *
 * A Solana program for allowlist-gated asset distribution with merkle tree
 * membership proofs and pull-based revenue sharing among contributors.
 *
 * Key Features:
 * - Merkle tree-based claim verification over a fixed eligibility list
 * - At-most-one claim per eligibility index, enforced by per-index records
 * - Claim payments and independent deposits pooled in a treasury
 * - Contributor shares in basis points, withdrawn pull-style with lazily
 *   computed entitlements
 * - Explicit Setup -> Active -> Closed lifecycle with automatic close on
 *   allocation exhaustion
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Nonce State PDA: Tracks campaign numbers for each owner
 * - Controller PDA: Phase machine, allowlist commitment, campaign parameters
 * - Asset Vault PDA: Holds the units handed out to claimants
 * - Treasury PDA: Accumulates claim payments and deposits
 * - Contributor Ledger PDA: Shares and per-contributor withdrawal history
 * - Claim Record PDAs: One per eligibility index, marks it claimed
 *
 * Workflow:
 * 1. Owner creates the controller and deposits the distributable assets
 * 2. Operator publishes the allowlist root; owner configures contributors
 * 3. Operator activates the mint
 * 4. Beneficiaries claim their allocation with merkle proofs, paying the
 *    mint price into the treasury
 * 5. Contributors withdraw their share of received funds at any time
 * 6. After close, the owner reclaims unclaimed assets and rounding dust;
 *    beneficiaries may close their claim records to recover rent
 *
 * The merkle tree builder and proof generator live in this crate (see the
 * merkle module) so off-chain tooling commits to exactly the hashing rules
 * the claim instruction verifies.
 */
#[program]
pub mod allowlist_mint {
    use super::*;

    /**
     * Creates a new mint controller
     *
     * Initializes a new campaign in the Setup phase with automatic nonce
     * management. The owner deposits the distributable asset units into a
     * vault controlled by the controller PDA.
     *
     * @param ctx - Account context containing controller, vaults, ledger and owner accounts
     * @param initial_allocation - Asset units deposited for distribution
     * @param mint_price - Payment units charged per allocated asset unit
     *
     * Access Control: Owner only
     */
    pub fn create_minter(
        ctx: Context<CreateMinter>,
        initial_allocation: u64,
        mint_price: u64,
    ) -> Result<()> {
        handle_create_minter(ctx, initial_allocation, mint_price)
    }

    /**
     * Publishes the allowlist merkle root
     *
     * The root commits to the full eligibility list of
     * (index, beneficiary, allocation) entries. Write-once during Setup.
     *
     * @param ctx - Account context containing controller and operator accounts
     * @param root - 32-byte root hash of the allowlist tree
     * @param leaf_count - Number of committed eligibility entries
     *
     * Access Control: Operator only
     */
    pub fn set_allowlist_root(
        ctx: Context<SetAllowlistRoot>,
        root: [u8; 32],
        leaf_count: u32,
    ) -> Result<()> {
        handle_set_allowlist_root(ctx, root, leaf_count)
    }

    /**
     * Configures the contributor revenue shares
     *
     * Installs the final contributor list. Shares must sum to exactly
     * 10000 basis points; the set is immutable afterwards.
     *
     * @param ctx - Account context containing controller, ledger and owner accounts
     * @param shares - Contributor addresses with their basis-point shares
     *
     * Access Control: Owner only
     */
    pub fn configure_contributors(
        ctx: Context<ConfigureContributors>,
        shares: Vec<ContributorInput>,
    ) -> Result<()> {
        handle_configure_contributors(ctx, shares)
    }

    /**
     * Activates the mint
     *
     * Transitions Setup -> Active once the allowlist root and contributor
     * configuration are both in place.
     *
     * @param ctx - Account context containing controller, ledger and operator accounts
     *
     * Access Control: Operator only
     */
    pub fn activate(ctx: Context<Activate>) -> Result<()> {
        handle_activate(ctx)
    }

    /**
     * Claims an allowlisted allocation
     *
     * Verifies the merkle proof for the caller's eligibility entry, marks
     * the index claimed, forwards the claim payment into the treasury and
     * transfers the allocated asset units to the claimant.
     *
     * @param ctx - Account context containing controller, ledger, record and token accounts
     * @param index - Eligibility index being claimed
     * @param allocation - Asset units the committed entry allocates
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any beneficiary with a valid merkle proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        index: u32,
        allocation: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, index, allocation, proof)
    }

    /**
     * Deposits funds into the contributor pool
     *
     * Credits an inflow that is not tied to any claim, e.g. royalties
     * routed back to the campaign.
     *
     * @param ctx - Account context containing controller, ledger, treasury and payer accounts
     * @param amount - Payment units to credit
     *
     * Access Control: Any payer while the mint is Active
     */
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        handle_deposit(ctx, amount)
    }

    /**
     * Withdraws a contributor's entitlement
     *
     * Pull-based payout of everything the signing contributor is owed out
     * of funds received so far. Fails with NothingOwed when the computed
     * entitlement is zero.
     *
     * @param ctx - Account context containing controller, ledger, treasury and contributor accounts
     *
     * Access Control: Configured contributors only
     */
    pub fn withdraw_share(ctx: Context<WithdrawShare>) -> Result<()> {
        handle_withdraw_share(ctx)
    }

    /**
     * Closes the mint
     *
     * Explicit administrative Active -> Closed transition. The same
     * transition happens automatically when every index has been claimed.
     *
     * @param ctx - Account context containing controller and operator accounts
     *
     * Access Control: Operator only
     */
    pub fn close_minting(ctx: Context<CloseMinting>) -> Result<()> {
        handle_close_minting(ctx)
    }

    /**
     * Reclaims unclaimed asset units after close
     *
     * Drains the asset vault back to the owner and closes the vault
     * account. The controller, ledger and treasury stay open so that
     * contributor withdrawals keep working.
     *
     * @param ctx - Account context containing controller, vault and owner accounts
     *
     * Access Control: Owner only, after close
     */
    pub fn withdraw_remaining(ctx: Context<WithdrawRemaining>) -> Result<()> {
        handle_withdraw_remaining(ctx)
    }

    /**
     * Sweeps basis-point rounding dust after close
     *
     * Transfers the treasury balance exceeding all outstanding contributor
     * entitlements to the owner. An explicit teardown step, never an
     * implicit side effect of other operations.
     *
     * @param ctx - Account context containing controller, ledger, treasury and owner accounts
     *
     * Access Control: Owner only, after close
     */
    pub fn sweep_dust(ctx: Context<SweepDust>) -> Result<()> {
        handle_sweep_dust(ctx)
    }

    /**
     * Closes a claim record and reclaims rent
     *
     * Allows a beneficiary to recover the rent of its claim record once
     * the mint has closed.
     *
     * @param ctx - Account context containing controller, record and beneficiary accounts
     *
     * Access Control: Recorded beneficiary only, after close
     */
    pub fn close_claim_record(ctx: Context<CloseClaimRecord>) -> Result<()> {
        handle_close_claim_record(ctx)
    }
}
