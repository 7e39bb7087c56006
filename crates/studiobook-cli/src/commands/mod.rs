pub mod clients;
pub mod init;
pub mod misc;
pub mod reports;
