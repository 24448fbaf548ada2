pub mod command;
pub mod hash;
pub mod session;
