mod contact;
mod list;
mod root;

pub use contact::ContactCommand;
pub use list::ListCommand;
pub use root::Cli;
