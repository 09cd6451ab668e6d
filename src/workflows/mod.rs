pub mod assessment;
pub mod export;
