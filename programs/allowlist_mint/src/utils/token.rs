use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, TransferChecked,
};

/// Moves tokens between accounts via transfer_checked, working for both
/// SPL Token and Token 2022 mints. Pass signer seeds when the authority is
/// a program-derived account.
pub fn transfer_tokens<'a>(
    token_program: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    authority: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, accounts, seeds),
        None => CpiContext::new(token_program, accounts),
    };

    transfer_checked(ctx, amount, decimals)
}

/// Closes a PDA-owned token account, sending its rent lamports to
/// `destination`. No-op when the account has already been drained of
/// lamports.
pub fn close_vault<'a>(
    token_program: AccountInfo<'a>,
    vault: AccountInfo<'a>,
    destination: AccountInfo<'a>,
    authority: AccountInfo<'a>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if vault.get_lamports() == 0 {
        return Ok(());
    }

    let accounts = CloseAccount {
        account: vault,
        destination,
        authority,
    };

    close_account(CpiContext::new_with_signer(
        token_program,
        accounts,
        signer_seeds,
    ))
}
