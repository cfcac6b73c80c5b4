//! Command implementations for gwt-cli

pub mod add;
pub mod cd;
pub mod clone;
pub mod init;
pub mod list;
pub mod rm;
pub mod shell;

pub use add::run_add;
pub use cd::run_cd;
pub use clone::run_clone;
pub use init::run_init;
pub use list::run_list;
pub use rm::run_rm;
pub use shell::run_shell_init;
