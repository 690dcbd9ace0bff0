//! Use case implementations.

mod activate_account_use_case;
mod login_use_case;
mod register_use_case;
mod resolve_token_use_case;

pub use activate_account_use_case::ActivateAccountUseCase;
pub use login_use_case::LoginUseCase;
pub use register_use_case::RegisterUseCase;
pub use resolve_token_use_case::{ResolvedToken, ResolveTokenUseCase};
