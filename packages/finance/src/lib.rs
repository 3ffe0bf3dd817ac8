pub mod duration;
pub mod error;
pub mod fraction;
pub mod percent;
