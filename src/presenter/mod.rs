pub mod html;
pub mod server;

pub use html::ChartSettings;
pub use server::{serve, AppState};
