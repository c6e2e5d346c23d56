pub mod build;
pub mod draft;
pub mod init;
pub mod studio;
