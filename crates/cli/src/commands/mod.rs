//! Command implementations.

mod demo;
mod info;
mod print;
mod validate;

pub use demo::run_demo;
pub use info::run_info;
pub use print::run_print;
pub use validate::run_validate;
