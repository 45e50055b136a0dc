//! `demo` command implementation.
//!
//! Binds a console sink and prints from two call sites, each fetching the
//! process-wide registry on its own.

use std::sync::Arc;

use anyhow::Result;
use contracts::ContractError;
use registry::{ConsoleSink, Registry};

/// Execute the `demo` command
pub fn run_demo() -> Result<()> {
    Registry::instance().add_sink("cout", Arc::new(ConsoleSink::new("stdout")));
    Registry::instance().print("cout", "Hello World")?;
    foo()?;
    Ok(())
}

fn foo() -> Result<(), ContractError> {
    Registry::instance().print("cout", "Foo message")
}
