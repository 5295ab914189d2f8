pub mod contract;
pub mod market;
pub mod profile;
