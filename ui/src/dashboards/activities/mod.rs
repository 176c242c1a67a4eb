mod series;
pub use series::{activity_series, ACTIVITIES_CANVAS_ID, ACTIVITIES_STYLE};

mod view;
pub use view::ActivitiesDashboard;
