pub mod community;
pub mod decide;
pub mod types;

pub use community::run;
pub use decide::decide;
pub use types::DecisionOutcome;
