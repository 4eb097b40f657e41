pub mod init;
pub mod list;
pub mod punch;
pub mod show;
