pub mod auto;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod session;
pub mod slot;
pub mod week;
