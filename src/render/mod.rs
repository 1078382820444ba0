// Static page assembly for the dashboard

pub mod format;
pub mod html;

pub use html::render_dashboard;
