//! Application layer coordinating state, events, and actions.
//!
//! Sits between the runtime (the preview binary, or any host that measures a
//! real page) and the domain, source, and forms layers.
//!
//! # Architecture
//!
//! ```text
//! Measurements/Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                    ↑                                  ↓
//!                                    └──────── Backend Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: Page, drawer, and input focus types
//! - [`navigation`]: Sidebar entries and default home page sections
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use jobboard_landing::app::{handle_event, AppState, Event, Page};
//! use jobboard_landing::ui::Theme;
//!
//! let mut state = AppState::new(vec![], vec![], Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::NavClicked(3))?;
//! assert_eq!(state.page, Page::Contact);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), jobboard_landing::LandingError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DrawerState, InputFocus, Page};
pub use navigation::{default_nav_items, default_sections, NavItem, NavTarget};
pub use state::{AppState, NavTiming};
