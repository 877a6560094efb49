mod service;
mod session_user;

pub use service::UserQueryService;
