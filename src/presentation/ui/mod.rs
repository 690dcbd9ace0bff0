//! UI screens.

mod activate_screen;
mod app;
mod login_screen;
mod register_screen;
mod shelf_screen;

pub use activate_screen::{ActivateAction, ActivateScreen};
pub use app::App;
pub use login_screen::{LoginAction, LoginScreen, LoginState};
pub use register_screen::{RegisterAction, RegisterScreen, RegisterState};
pub use shelf_screen::{ShelfAction, ShelfScreenState, ShelfTab};
