mod error;
mod geocode_table;
mod resolve_address;

pub use self::{error::Error, geocode_table::*, resolve_address::*};

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
pub mod tests;
