// src/application/ports/mod.rs
pub mod security;
pub mod session_store;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type SessionStorePort = dyn session_store::SessionStore;
pub type ClockPort = dyn time::Clock;
