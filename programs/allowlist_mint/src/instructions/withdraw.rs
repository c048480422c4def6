use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for a contributor withdrawal
 *
 * Withdrawals are pull-based: the ledger computes what the signing
 * contributor is owed out of everything received so far, books the
 * withdrawal, and only then moves tokens out of the treasury. A failed
 * transfer therefore cannot be replayed into a second payout.
 *
 * Access Control: Only a configured contributor, for its own entitlement
 *
 * Business Logic:
 * - Available in every phase; before any funds arrive the computed
 *   entitlement is zero and the call fails with NothingOwed
 * - Withdrawals remain available after the mint closes
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawShare<'info> {
    /// The controller this ledger belongs to
    pub controller: Account<'info, MintController>,

    /// The contributor ledger booking the withdrawal
    /// - Derived from: ["ledger", controller_key]
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, ContributorLedger>,

    /// Treasury the entitlement is paid out of
    /// - Derived from: ["treasury", controller_key]
    #[account(
        mut,
        seeds = [TREASURY_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    /// Contributor's token account receiving the payout
    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = contributor,
        token::token_program = payment_token_program,
    )]
    pub contributor_payment_account: InterfaceAccount<'info, TokenAccount>,

    /// The payment mint for verification
    #[account(
        token::token_program = payment_token_program,
        constraint = payment_mint.key() == controller.payment_mint @ AllowlistMintError::PaymentMintMismatch
    )]
    pub payment_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The contributor pulling its entitlement
    #[account(mut)]
    pub contributor: Signer<'info>,

    /// Token program of the payment mint
    pub payment_token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays out everything currently owed to the signing contributor
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_withdraw_share(ctx: Context<WithdrawShare>) -> Result<()> {
    let contributor_key = ctx.accounts.contributor.key();

    // Book the withdrawal first; the transfer below must not be able to
    // re-enter a state where the same amount is owed twice
    let amount = ctx.accounts.ledger.record_withdrawal(&contributor_key)?;

    let controller = &ctx.accounts.controller;
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
        ctx.accounts.contributor_payment_account.to_account_info(),
        ctx.accounts.controller.to_account_info(),
        amount,
        ctx.accounts.payment_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(ContributorWithdrawal {
        controller: controller.key(),
        contributor: contributor_key,
        amount,
    });

    Ok(())
}
