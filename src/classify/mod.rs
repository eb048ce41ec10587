mod breaks;
mod class;
mod values;

pub use breaks::{Method, breaks_for, equal_interval, methods, natural_breaks, quantile};
pub use class::class_of;
pub use values::{collect_values, numeric_attributes};

pub(crate) use values::parse_numeric;
