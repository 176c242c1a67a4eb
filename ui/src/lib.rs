//! Shared UI crate for the running index dashboards. Chart controllers, data
//! access and views live here; platform crates only add routing and assets.

pub mod charts;
pub mod core;
pub mod dashboards;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
