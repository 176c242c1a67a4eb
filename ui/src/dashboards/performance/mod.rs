mod series;
pub use series::{performance_series, PERFORMANCE_CANVAS_ID, PERFORMANCE_STYLE};

mod view;
pub use view::PerformanceDashboard;
