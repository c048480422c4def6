use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for activating the mint
 *
 * Transitions the campaign from Setup to Active once both one-time inputs
 * are in place: the allowlist root and the contributor configuration.
 *
 * Access Control: Only the operator can activate
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Activate<'info> {
    /// The controller account to transition
    #[account(mut)]
    pub controller: Account<'info, MintController>,

    /// The contributor ledger, checked for completed configuration
    /// - Derived from: ["ledger", controller_key]
    #[account(
        seeds = [LEDGER_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, ContributorLedger>,

    /// The operator who can activate the mint
    /// - Must match the operator stored in the controller state
    #[account(constraint = operator.key() == controller.operator @ AllowlistMintError::OnlyOperator)]
    pub operator: Signer<'info>,
}

/// Transitions Setup -> Active after validating the one-time configuration.
pub fn handle_activate(ctx: Context<Activate>) -> Result<()> {
    let controller = &mut ctx.accounts.controller;

    require!(
        controller.phase == MintPhase::Setup,
        AllowlistMintError::SetupComplete
    );
    require!(
        controller.allowlist_root != [0; 32],
        AllowlistMintError::RootNotSet
    );
    require!(
        ctx.accounts.ledger.is_configured(),
        AllowlistMintError::ContributorsNotConfigured
    );

    controller.phase = MintPhase::Active;

    emit_cpi!(MintingActivated {
        controller: controller.key(),
        operator: ctx.accounts.operator.key(),
    });

    Ok(())
}
