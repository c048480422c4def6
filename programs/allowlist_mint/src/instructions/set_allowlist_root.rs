use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::merkle::proof_depth;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for publishing the allowlist root
 *
 * The root commits to the full eligibility list: each leaf hashes one
 * (index, beneficiary, allocation) entry. Claimants later prove membership
 * against this root.
 *
 * Access Control: Only the operator can set the root
 *
 * Business Logic:
 * - The root is write-once; republishing would silently change who may
 *   claim, so a second call is rejected
 * - The committed leaf count is stored alongside the root to pin the
 *   expected proof length for every claim
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetAllowlistRoot<'info> {
    /// The controller account to update
    #[account(mut)]
    pub controller: Account<'info, MintController>,

    /// The operator who can set the root
    /// - Must match the operator stored in the controller state
    #[account(constraint = operator.key() == controller.operator @ AllowlistMintError::OnlyOperator)]
    pub operator: Signer<'info>,
}

/**
 * Publishes the merkle root of the eligibility list
 *
 * @param ctx - The account context containing controller and operator accounts
 * @param root - 32-byte root hash of the allowlist tree
 * @param leaf_count - Number of entries the tree commits to
 */
pub fn handle_set_allowlist_root(
    ctx: Context<SetAllowlistRoot>,
    root: [u8; 32],
    leaf_count: u32,
) -> Result<()> {
    let controller = &mut ctx.accounts.controller;

    require!(
        controller.phase == MintPhase::Setup,
        AllowlistMintError::SetupComplete
    );

    // An all-zero root would commit to nothing claimable
    require!(root != [0; 32], AllowlistMintError::InvalidRoot);
    require!(
        controller.allowlist_root == [0; 32],
        AllowlistMintError::RootAlreadySet
    );

    require!(leaf_count > 0, AllowlistMintError::EmptyAllowlist);
    require!(
        proof_depth(leaf_count) <= MAX_TREE_DEPTH,
        AllowlistMintError::InvalidRoot
    );

    controller.allowlist_root = root;
    controller.leaf_count = leaf_count;

    emit_cpi!(AllowlistRootSet {
        controller: controller.key(),
        operator: ctx.accounts.operator.key(),
        root,
        leaf_count,
    });

    Ok(())
}
