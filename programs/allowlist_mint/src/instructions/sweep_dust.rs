use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for sweeping rounding dust at teardown
 *
 * Basis-point entitlements round down, so the treasury can hold slightly
 * more than the sum of what contributors are owed - at most one unit per
 * contributor beyond the first. That residue stays claimable while funds
 * keep arriving; once the mint has closed the owner may sweep whatever
 * exceeds the outstanding entitlements. Contributor balances are untouched.
 *
 * Access Control: Only the owner, and only after the mint has closed
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SweepDust<'info> {
    /// The controller account the treasury belongs to
    pub controller: Account<'info, MintController>,

    /// The contributor ledger, read to compute outstanding entitlements
    /// - Derived from: ["ledger", controller_key]
    #[account(
        seeds = [LEDGER_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, ContributorLedger>,

    /// Treasury the dust is swept out of
    /// - Derived from: ["treasury", controller_key]
    #[account(
        mut,
        seeds = [TREASURY_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account receiving the dust
    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = owner,
        token::token_program = payment_token_program,
    )]
    pub owner_payment_account: InterfaceAccount<'info, TokenAccount>,

    /// The payment mint for verification
    #[account(
        token::token_program = payment_token_program,
        constraint = payment_mint.key() == controller.payment_mint @ AllowlistMintError::PaymentMintMismatch
    )]
    pub payment_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The owner of the campaign
    /// - Must match the owner stored in the controller state
    #[account(
        mut,
        constraint = owner.key() == controller.owner @ AllowlistMintError::OnlyOwner
    )]
    pub owner: Signer<'info>,

    /// Token program of the payment mint
    pub payment_token_program: Interface<'info, TokenInterface>,
}

/**
 * Sweeps the treasury balance that exceeds all outstanding entitlements
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_sweep_dust(ctx: Context<SweepDust>) -> Result<()> {
    let controller = &ctx.accounts.controller;

    require!(
        controller.phase == MintPhase::Closed,
        AllowlistMintError::MintingNotClosed
    );

    let outstanding = ctx.accounts.ledger.outstanding()?;
    let dust = ctx
        .accounts
        .treasury
        .amount
        .checked_sub(outstanding)
        .ok_or(AllowlistMintError::ArithmeticOverflow)?;
    require!(dust > 0, AllowlistMintError::NothingOwed);

    let nonce_bytes = controller.nonce.to_le_bytes();
    let seeds = &[
        MINTER_SEED.as_bytes(),
        controller.asset_mint.as_ref(),
        controller.owner.as_ref(),
        nonce_bytes.as_ref(),
        &[controller.bump],
    ];
    let signer = &[&seeds[..]];

    transfer_tokens(
        ctx.accounts.payment_token_program.to_account_info(),
        ctx.accounts.payment_mint.to_account_info(),
        ctx.accounts.treasury.to_account_info(),
        ctx.accounts.owner_payment_account.to_account_info(),
        ctx.accounts.controller.to_account_info(),
        dust,
        ctx.accounts.payment_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(DustSwept {
        controller: controller.key(),
        owner: ctx.accounts.owner.key(),
        amount: dust,
    });

    Ok(())
}
