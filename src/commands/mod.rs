pub mod annotate;
pub mod init;
pub mod list;
pub mod search;
pub mod timeline;
