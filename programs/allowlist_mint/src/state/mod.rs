pub mod minter_state;
pub mod claim_state;
pub mod ledger_state;
pub mod nonce_state;

pub use minter_state::*;
pub use claim_state::*;
pub use ledger_state::*;
pub use nonce_state::*;
