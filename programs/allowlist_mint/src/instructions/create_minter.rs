use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_tokens;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new mint controller
 *
 * This instruction initializes a new allowlist mint campaign with automatic
 * nonce management:
 * - Creates or updates a nonce state PDA to track campaign numbers
 * - Creates the controller PDA with an auto-incremented nonce
 * - Creates the asset vault PDA and deposits the distributable asset units
 * - Creates the payment treasury PDA and the contributor ledger PDA
 * - Sets up the operator who can manage the campaign
 *
 * Access Control: Only the owner can create a controller
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateMinter<'info> {
    /// Nonce state account (PDA) that tracks campaign numbers for this owner
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The main controller account (PDA)
    /// - Stores the phase machine, allowlist commitment and campaign parameters
    /// - Derived from: ["minter", asset_mint, owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    #[account(
        init,
        payer = owner,
        space = MintController::LEN,
        seeds = [
            MINTER_SEED.as_bytes(),
            asset_mint.key().as_ref(),
            owner.key().as_ref(),
            (owner_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub controller: Account<'info, MintController>,

    /// Asset vault (PDA) holding the units handed out to claimants
    /// - Controlled by the controller PDA as token authority
    /// - Derived from: ["vault", controller_key]
    #[account(
        init,
        token::mint = asset_mint,
        token::authority = controller,
        token::token_program = asset_token_program,
        seeds = [VAULT_SEED.as_bytes(), controller.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub asset_vault: InterfaceAccount<'info, TokenAccount>,

    /// Payment treasury (PDA) accumulating claim payments and deposits
    /// - Controlled by the controller PDA as token authority
    /// - Derived from: ["treasury", controller_key]
    #[account(
        init,
        token::mint = payment_mint,
        token::authority = controller,
        token::token_program = payment_token_program,
        seeds = [TREASURY_SEED.as_bytes(), controller.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    /// Contributor ledger (PDA), created empty here and configured during
    /// Setup via configure_contributors
    /// - Derived from: ["ledger", controller_key]
    #[account(
        init,
        payer = owner,
        space = ContributorLedger::SPACE,
        seeds = [LEDGER_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, ContributorLedger>,

    /// The mint of the asset being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = asset_token_program,
    )]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    /// The mint claimants pay with
    #[account(
        token::token_program = payment_token_program,
    )]
    pub payment_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account containing the asset units to be deposited
    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = owner,
        token::token_program = asset_token_program,
    )]
    pub owner_asset_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the campaign
    /// - Funds the vault, configures contributors, reclaims leftovers
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The operator account that can manage the campaign
    /// - Can set the allowlist root, activate and close the mint
    /// CHECK: This account is validated by storing its key in the controller state
    pub operator: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program of the asset mint
    pub asset_token_program: Interface<'info, TokenInterface>,

    /// Token program of the payment mint
    pub payment_token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new mint controller with automatic nonce management
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_allocation - Asset units deposited for distribution
 * @param mint_price - Payment units charged per allocated asset unit
 */
pub fn handle_create_minter(
    ctx: Context<CreateMinter>,
    initial_allocation: u64,
    mint_price: u64,
) -> Result<()> {
    require!(initial_allocation > 0, AllowlistMintError::InvalidAmount);

    require!(
        ctx.accounts.operator.key() != Pubkey::default(),
        AllowlistMintError::InvalidOperator
    );

    let owner_nonce = &mut ctx.accounts.owner_nonce;
    let controller = &mut ctx.accounts.controller;

    let current_nonce = owner_nonce
        .nonce
        .checked_add(1)
        .ok_or(AllowlistMintError::ArithmeticOverflow)?;
    owner_nonce.nonce = current_nonce;

    controller.bump = ctx.bumps.controller;
    controller.nonce = current_nonce;
    controller.owner = ctx.accounts.owner.key();
    controller.operator = ctx.accounts.operator.key();
    controller.asset_mint = ctx.accounts.asset_mint.key();
    controller.asset_vault = ctx.accounts.asset_vault.key();
    controller.payment_mint = ctx.accounts.payment_mint.key();
    controller.treasury = ctx.accounts.treasury.key();
    controller.phase = MintPhase::Setup;
    controller.mint_price = mint_price;
    controller.initial_allocation = initial_allocation;
    // Note: allowlist_root, leaf_count, claimed_count, total_allocated
    // keep their zero defaults until Setup completes

    // Fund the vault up front so every committed allocation is backed
    transfer_tokens(
        ctx.accounts.asset_token_program.to_account_info(),
        ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.owner_asset_account.to_account_info(),
        ctx.accounts.asset_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        initial_allocation,
        ctx.accounts.asset_mint.decimals,
        None,
    )?;

    emit_cpi!(MinterCreated {
        controller: ctx.accounts.controller.key(),
        nonce: current_nonce,
        owner: ctx.accounts.owner.key(),
        operator: ctx.accounts.operator.key(),
        asset_mint: ctx.accounts.asset_mint.key(),
        payment_mint: ctx.accounts.payment_mint.key(),
        initial_allocation,
        mint_price,
    });

    Ok(())
}
