mod intent;
mod reducer;
mod state;

pub use intent::BrowserIntent;
pub use reducer::BrowserReducer;
pub use state::BrowserState;
