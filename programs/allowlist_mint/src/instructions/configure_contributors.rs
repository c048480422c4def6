use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for configuring the contributor revenue shares
 *
 * The final contributor list is supplied once, during Setup. Shares are
 * expressed in basis points and must sum to exactly 10000; the set is
 * immutable afterwards, so entitlements can never shift under funds that
 * were already received.
 *
 * Access Control: Only the owner can configure contributors
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ConfigureContributors<'info> {
    /// The controller this ledger belongs to
    pub controller: Account<'info, MintController>,

    /// The contributor ledger to configure
    /// - Derived from: ["ledger", controller_key]
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, ContributorLedger>,

    /// The owner of the campaign
    /// - Must match the owner stored in the controller state
    #[account(constraint = owner.key() == controller.owner @ AllowlistMintError::OnlyOwner)]
    pub owner: Signer<'info>,
}

/**
 * Installs the final contributor set
 *
 * @param ctx - The account context containing controller, ledger and owner
 * @param shares - Contributor addresses with their basis-point shares
 */
pub fn handle_configure_contributors(
    ctx: Context<ConfigureContributors>,
    shares: Vec<ContributorInput>,
) -> Result<()> {
    let controller = &ctx.accounts.controller;
    let ledger = &mut ctx.accounts.ledger;

    require!(
        controller.phase == MintPhase::Setup,
        AllowlistMintError::SetupComplete
    );
    require!(
        !ledger.is_configured(),
        AllowlistMintError::ContributorsAlreadyConfigured
    );

    ledger.configure(&shares)?;

    emit_cpi!(ContributorsConfigured {
        controller: controller.key(),
        contributor_count: shares.len() as u8,
    });

    Ok(())
}
