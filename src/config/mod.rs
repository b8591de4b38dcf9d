pub mod cli;
pub mod file;

pub use cli::CliConfig;
pub use file::LoginConfig;
