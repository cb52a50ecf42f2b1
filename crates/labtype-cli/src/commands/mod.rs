pub mod describe;
pub mod export;
pub mod init;
pub mod profiles;
pub mod questions;
pub mod random;
pub mod take;
