pub mod mvi;
pub mod pull_to_refresh;
pub mod refresh;
pub mod runtime;
pub mod screen;
pub mod vanilla;

pub use pull_to_refresh::{PullToRefresh, RefreshError, RefreshStrategy};
pub use runtime::{render_lines, Session, SessionAction, SessionError};
pub use screen::{AppSelection, RefreshScreen};
