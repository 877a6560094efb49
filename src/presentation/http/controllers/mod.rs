pub mod articles;
pub mod home;
pub mod users;
