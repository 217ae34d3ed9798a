pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod search;

#[cfg(test)]
mod test;
