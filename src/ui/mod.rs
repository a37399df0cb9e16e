//! User interface rendering layer with component-based architecture.
//!
//! Renders the landing site as an ANSI-styled terminal frame. The same view
//! model could drive any other front end; the terminal renderer is what the
//! preview binary uses.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, truncation, highlighting)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, DEFAULT_THEME};
pub use viewmodel::{EmptyState, FooterInfo, HeaderInfo, PageBody, SearchBarInfo, SidebarInfo, UIViewModel};
