pub mod help;
pub mod info;
pub mod install;
pub mod list;
pub mod uninstall;
