// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod token;

pub use counts::Occurrences;
pub use token::Token;
