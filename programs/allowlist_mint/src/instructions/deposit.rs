use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for depositing funds outside of a claim
 *
 * Credits the contributor pool with an inflow that is not tied to any
 * particular claim, e.g. secondary-sale royalties routed back to the
 * campaign. The amount lands in the treasury and becomes withdrawable
 * pro rata by the configured contributors.
 *
 * Access Control: Any payer while the mint is Active
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The controller account, checked for the Active phase
    pub controller: Account<'info, MintController>,

    /// The contributor ledger credited with the deposit
    /// - Derived from: ["ledger", controller_key]
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, ContributorLedger>,

    /// Treasury receiving the deposit
    /// - Derived from: ["treasury", controller_key]
    #[account(
        mut,
        seeds = [TREASURY_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    /// Payer's token account the deposit is taken from
    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = payer,
        token::token_program = payment_token_program,
    )]
    pub payer_payment_account: InterfaceAccount<'info, TokenAccount>,

    /// The payment mint for verification
    #[account(
        token::token_program = payment_token_program,
        constraint = payment_mint.key() == controller.payment_mint @ AllowlistMintError::PaymentMintMismatch
    )]
    pub payment_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The account paying the deposit
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Token program of the payment mint
    pub payment_token_program: Interface<'info, TokenInterface>,
}

/**
 * Credits an independent inflow to the contributor pool
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Payment units to credit
 */
pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.controller.phase == MintPhase::Active,
        AllowlistMintError::NotActive
    );
    require!(amount > 0, AllowlistMintError::InvalidAmount);

    // Ledger credit strictly precedes the transfer (CEI ordering)
    let ledger = &mut ctx.accounts.ledger;
    ledger.receive(amount)?;
    let total_received = ledger.total_received;

    transfer_tokens(
        ctx.accounts.payment_token_program.to_account_info(),
        ctx.accounts.payment_mint.to_account_info(),
        ctx.accounts.payer_payment_account.to_account_info(),
        ctx.accounts.treasury.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        amount,
        ctx.accounts.payment_mint.decimals,
        None,
    )?;

    emit_cpi!(FundsDeposited {
        controller: ctx.accounts.controller.key(),
        payer: ctx.accounts.payer.key(),
        amount,
        total_received,
    });

    Ok(())
}
