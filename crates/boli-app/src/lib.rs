pub mod controller;
pub mod events;
pub mod profile;
pub mod session;
pub mod state;
pub mod telemetry;

pub use controller::{AppController, ChannelSet};
pub use session::Session;
pub use state::AppState;

#[cfg(test)]
mod tests;
