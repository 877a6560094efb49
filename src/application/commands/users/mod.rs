mod login;
mod register;
mod service;

pub use login::LoginUserCommand;
pub use register::{RegisterUserCommand, RegistrationMessages};
pub use service::UserCommandService;
