pub mod estimate;
pub use estimate::*;

pub mod estimator;
pub use estimator::*;

pub mod session;
pub use session::*;
