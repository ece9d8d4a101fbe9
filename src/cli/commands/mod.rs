//! Command handlers, one module per subcommand.

pub mod ask;
pub mod chat;
pub mod domains;
pub mod init;
