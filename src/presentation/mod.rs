/// Earn enumerations: categories, order types, account types and coins
pub mod earn;

pub use earn::*;
