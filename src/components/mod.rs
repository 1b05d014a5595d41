pub mod action_bar;
pub mod action_button;
pub mod advisory_view;
pub mod header;
pub mod weather_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use action_bar::{ActionBar, ActionBarProps};
pub use action_button::{ActionButton, ActionButtonProps};
pub use advisory_view::{AdvisoryView, AdvisoryViewProps, FOOTER_TEXT, LOADING_TEXT};
pub use header::{APP_TITLE, Header};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
