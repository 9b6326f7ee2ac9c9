pub mod pool;
pub mod transaction;
