mod activities;
pub use activities::Activities;

mod performance;
pub use performance::Performance;
