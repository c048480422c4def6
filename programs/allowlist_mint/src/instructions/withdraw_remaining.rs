use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{close_vault, transfer_tokens};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for reclaiming unclaimed asset units
 *
 * Once the mint has closed, allocations that were never claimed stay
 * locked in the vault. This instruction lets the owner drain and close the
 * vault. The controller, ledger and treasury stay open: contributor
 * withdrawals outlive the mint.
 *
 * Access Control: Only the owner, and only after the mint has closed
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawRemaining<'info> {
    /// The controller account the vault belongs to
    pub controller: Account<'info, MintController>,

    /// Asset vault containing the unclaimed units
    /// - Derived from: ["vault", controller_key]
    /// - Will be emptied and closed
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub asset_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account receiving the unclaimed units
    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = owner,
        token::token_program = asset_token_program,
    )]
    pub owner_asset_account: InterfaceAccount<'info, TokenAccount>,

    /// The asset mint for verification
    #[account(
        token::token_program = asset_token_program,
        constraint = asset_mint.key() == controller.asset_mint @ AllowlistMintError::AssetMintMismatch
    )]
    pub asset_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The owner of the campaign
    /// - Must match the owner stored in the controller state
    /// - Receives the unclaimed units and the vault rent
    #[account(
        mut,
        constraint = owner.key() == controller.owner @ AllowlistMintError::OnlyOwner
    )]
    pub owner: Signer<'info>,

    /// Token program of the asset mint
    pub asset_token_program: Interface<'info, TokenInterface>,
}

/**
 * Drains the asset vault back to the owner and closes it
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_withdraw_remaining(ctx: Context<WithdrawRemaining>) -> Result<()> {
    let controller = &ctx.accounts.controller;

    require!(
        controller.phase == MintPhase::Closed,
        AllowlistMintError::MintingNotClosed
    );

    let remaining_balance = ctx.accounts.asset_vault.amount;

    let nonce_bytes = controller.nonce.to_le_bytes();
    let seeds = &[
        MINTER_SEED.as_bytes(),
        controller.asset_mint.as_ref(),
        controller.owner.as_ref(),
        nonce_bytes.as_ref(),
        &[controller.bump],
    ];
    let signer = &[&seeds[..]];

    if remaining_balance > 0 {
        transfer_tokens(
            ctx.accounts.asset_token_program.to_account_info(),
            ctx.accounts.asset_mint.to_account_info(),
            ctx.accounts.asset_vault.to_account_info(),
            ctx.accounts.owner_asset_account.to_account_info(),
            ctx.accounts.controller.to_account_info(),
            remaining_balance,
            ctx.accounts.asset_mint.decimals,
            Some(signer),
        )?;
    }

    // The empty vault has no further use; reclaim its rent
    close_vault(
        ctx.accounts.asset_token_program.to_account_info(),
        ctx.accounts.asset_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.controller.to_account_info(),
        signer,
    )?;

    emit_cpi!(RemainingAssetsWithdrawn {
        controller: controller.key(),
        owner: ctx.accounts.owner.key(),
        amount: remaining_balance,
    });

    Ok(())
}
