//! Small helpers shared by the server and its handlers.

pub mod duration;
pub mod signal;

pub use duration::format_uptime;
pub use signal::shutdown_signal;
