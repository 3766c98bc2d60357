//! Trace playback TUI built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus,
//!   autoplay with adjustable speed
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (timeline, state, explanation, pattern info, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`PlaybackTrace`] and call [`App::run`] to start the event loop.
//!
//! [`PlaybackTrace`]: crate::playback::PlaybackTrace
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
