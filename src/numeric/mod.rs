pub mod complex;
pub mod format;

pub use complex::ComplexNumber;
pub use format::AngleUnit;
