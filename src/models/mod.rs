pub mod comparison;
pub mod device;
pub mod estimate;

pub use comparison::*;
pub use device::*;
pub use estimate::*;
