use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for explicitly closing the mint
 *
 * Transitions Active -> Closed. Closed is terminal: claims and deposits
 * stop, contributor withdrawals keep working. The transition also happens
 * automatically when every eligibility index has been claimed; this
 * instruction is the administrative trigger.
 *
 * Access Control: Only the operator can close the mint
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseMinting<'info> {
    /// The controller account to transition
    #[account(mut)]
    pub controller: Account<'info, MintController>,

    /// The operator who can close the mint
    /// - Must match the operator stored in the controller state
    #[account(constraint = operator.key() == controller.operator @ AllowlistMintError::OnlyOperator)]
    pub operator: Signer<'info>,
}

/// Transitions Active -> Closed on operator request.
pub fn handle_close_minting(ctx: Context<CloseMinting>) -> Result<()> {
    let controller = &mut ctx.accounts.controller;

    require!(
        controller.phase == MintPhase::Active,
        AllowlistMintError::NotActive
    );

    controller.phase = MintPhase::Closed;

    emit_cpi!(MintingClosed {
        controller: controller.key(),
        exhausted: false,
        claimed_count: controller.claimed_count,
    });

    Ok(())
}
