//! # TUI Components
//!
//! ## Navigation surfaces
//!
//! - `nav_surface`: the shared renderable description (`NavSurface`), click
//!   events (`NavClick`) and keyboard focus (`NavFocus`)
//! - `navigation_bar`: `render_bar()`, horizontal, optional labels
//! - `navigation_rail`: `render_rail()`, vertical, icon only
//!
//! Both surfaces are stateless: they are rebuilt from props every frame.
//! Only the keyboard focus persists between frames.
//!
//! ## Host chrome
//!
//! - `TitleBar`: current location and status message
//! - `ScreenView`: placeholder content for the current location

pub mod nav_surface;
pub mod navigation_bar;
pub mod navigation_rail;
mod screen_view;
mod title_bar;

pub use nav_surface::{FocusEvent, NavClick, NavFocus, NavItem, NavSurface, Orientation};
pub use navigation_bar::{BarOptions, render_bar};
pub use navigation_rail::{RailOptions, render_rail};
pub use screen_view::ScreenView;
pub use title_bar::TitleBar;
