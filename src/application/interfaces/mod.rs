/// Earn service interface
pub mod earn;
