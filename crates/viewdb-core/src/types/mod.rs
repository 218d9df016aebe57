mod date;
mod decimal;
mod duration;
mod float64;

pub use date::Date;
pub use decimal::Decimal;
pub use duration::Duration;
pub use float64::Float64;
