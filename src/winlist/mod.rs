#[macro_use]
extern crate log;

pub type Result<T> = std::result::Result<T, Error>;

pub mod error;
pub mod icon;
pub mod ident;
pub mod name;
pub mod session;
pub mod switcher;
pub mod window;

pub use error::Error;
