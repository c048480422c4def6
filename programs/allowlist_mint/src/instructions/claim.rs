use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::merkle::{hash_leaf, proof_depth, verify};
use crate::state::*;
use crate::utils::transfer_tokens;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for claiming an allowlisted allocation
 *
 * The beneficiary proves membership of the eligibility list with a merkle
 * proof for its (index, beneficiary, allocation) entry. On success the
 * index is marked claimed forever, the claim payment is forwarded into the
 * contributor pool, and the allocated asset units leave the vault.
 *
 * Access Control: Any beneficiary with a valid merkle proof for its entry
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(index: u32)]
pub struct Claim<'info> {
    /// The controller account carrying the allowlist commitment
    /// - Will be modified to update claim counters
    #[account(mut)]
    pub controller: Account<'info, MintController>,

    /// The contributor ledger credited with the claim payment
    /// - Derived from: ["ledger", controller_key]
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, ContributorLedger>,

    /// Claim record for this eligibility index
    /// - The index in the derivation makes it the exclusivity key
    /// - Derived from: ["claim", controller_key, index_le_bytes]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), controller.key().as_ref(), index.to_le_bytes().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Asset vault the allocation is paid out of
    /// - Derived from: ["vault", controller_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub asset_vault: InterfaceAccount<'info, TokenAccount>,

    /// Treasury the claim payment flows into
    /// - Derived from: ["treasury", controller_key]
    #[account(
        mut,
        seeds = [TREASURY_SEED.as_bytes(), controller.key().as_ref()],
        bump
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's asset token account receiving the allocation
    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = claimant,
        token::token_program = asset_token_program,
    )]
    pub claimant_asset_account: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's payment token account the mint price is taken from
    #[account(
        mut,
        token::mint = payment_mint,
        token::authority = claimant,
        token::token_program = payment_token_program,
    )]
    pub claimant_payment_account: InterfaceAccount<'info, TokenAccount>,

    /// The asset mint for verification
    #[account(
        token::token_program = asset_token_program,
        constraint = asset_mint.key() == controller.asset_mint @ AllowlistMintError::AssetMintMismatch
    )]
    pub asset_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The payment mint for verification
    #[account(
        token::token_program = payment_token_program,
        constraint = payment_mint.key() == controller.payment_mint @ AllowlistMintError::PaymentMintMismatch
    )]
    pub payment_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The beneficiary claiming its allocation
    /// - Must sign; the leaf hash binds the entry to this key
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for claim record creation
    pub system_program: Program<'info, System>,

    /// Token program of the asset mint
    pub asset_token_program: Interface<'info, TokenInterface>,

    /// Token program of the payment mint
    pub payment_token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes an allowlist claim
 *
 * @param ctx - The account context containing all required accounts
 * @param index - Eligibility index being claimed
 * @param allocation - Asset units the committed entry allocates
 * @param proof - Sibling hashes from the entry's leaf up to the root
 *
 * Validation Process:
 * 1. Mint must be Active
 * 2. Structural proof checks (index range, proof length) reject malformed
 *    input before any hashing
 * 3. Merkle verification of the (index, claimant, allocation) leaf
 * 4. The index must not have been claimed before
 * 5. Record + counters update, then payment and asset transfers
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    index: u32,
    allocation: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let controller = &mut ctx.accounts.controller;
    let claim_record = &mut ctx.accounts.claim_record;

    // ===== VALIDATION PHASE =====

    require!(
        controller.phase == MintPhase::Active,
        AllowlistMintError::NotActive
    );
    require!(
        controller.allowlist_root != [0; 32],
        AllowlistMintError::RootNotSet
    );

    // Malformed structure is indistinguishable from a wrong proof to the
    // caller; both surface as InvalidProof
    require!(index < controller.leaf_count, AllowlistMintError::InvalidProof);
    require!(
        proof.len() == proof_depth(controller.leaf_count),
        AllowlistMintError::InvalidProof
    );

    // ===== MERKLE PROOF VERIFICATION =====

    let claimant_key = ctx.accounts.claimant.key();
    let leaf = hash_leaf(index, &claimant_key, allocation);
    require!(
        verify(&proof, controller.allowlist_root, leaf),
        AllowlistMintError::InvalidProof
    );

    // Exclusivity comes after proof validity: a bad proof for a claimed
    // index still reads as InvalidProof
    require!(!claim_record.claimed, AllowlistMintError::AlreadyClaimed);

    require!(
        ctx.accounts.asset_vault.amount >= allocation,
        AllowlistMintError::InsufficientVaultBalance
    );

    let payment = controller
        .mint_price
        .checked_mul(allocation)
        .ok_or(AllowlistMintError::ArithmeticOverflow)?;

    // ===== EFFECTS PHASE (State Updates) =====

    // Mark the index claimed before any token movement (CEI ordering)
    claim_record.claimed = true;
    claim_record.index = index;
    claim_record.beneficiary = claimant_key;
    claim_record.allocation = allocation;

    let new_claimed_count = controller
        .claimed_count
        .checked_add(1)
        .ok_or(AllowlistMintError::ArithmeticOverflow)?;
    controller.claimed_count = new_claimed_count;
    controller.total_allocated = controller
        .total_allocated
        .checked_add(allocation)
        .ok_or(AllowlistMintError::ArithmeticOverflow)?;

    ctx.accounts.ledger.receive(payment)?;

    // Allocation exhaustion: every committed index has now been claimed
    let exhausted = new_claimed_count == controller.leaf_count;
    if exhausted {
        controller.phase = MintPhase::Closed;
    }

    // Prepare immutable copies for the transfer phase
    let nonce_bytes = controller.nonce.to_le_bytes();
    let asset_mint_key = controller.asset_mint;
    let owner_key = controller.owner;
    let controller_bump = controller.bump;
    let controller_key = controller.key();

    // ===== INTERACTIONS PHASE (Token Transfers) =====

    // Claim payment into the treasury, signed by the claimant
    if payment > 0 {
        transfer_tokens(
            ctx.accounts.payment_token_program.to_account_info(),
            ctx.accounts.payment_mint.to_account_info(),
            ctx.accounts.claimant_payment_account.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.claimant.to_account_info(),
            payment,
            ctx.accounts.payment_mint.decimals,
            None,
        )?;
    }

    // Allocation out of the vault, signed by the controller PDA
    let seeds = &[
        MINTER_SEED.as_bytes(),
        asset_mint_key.as_ref(),
        owner_key.as_ref(),
        nonce_bytes.as_ref(),
        &[controller_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_tokens(
        ctx.accounts.asset_token_program.to_account_info(),
        ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.asset_vault.to_account_info(),
        ctx.accounts.claimant_asset_account.to_account_info(),
        ctx.accounts.controller.to_account_info(),
        allocation,
        ctx.accounts.asset_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(AllocationClaimed {
        controller: controller_key,
        index,
        beneficiary: claimant_key,
        allocation,
        payment,
        claimed_count: new_claimed_count,
    });

    if exhausted {
        msg!("all {} eligibility indices claimed, closing mint", new_claimed_count);
        emit_cpi!(MintingClosed {
            controller: controller_key,
            exhausted: true,
            claimed_count: new_claimed_count,
        });
    }

    Ok(())
}
