pub mod assist;
pub mod init;
pub mod serve;
pub mod story;
