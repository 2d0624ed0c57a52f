//! Command implementations.

mod fetch;

pub use fetch::run_fetch;

#[cfg(test)]
pub(crate) use fetch::fetch_and_print;
