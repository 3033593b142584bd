//! # Core Navigation Logic
//!
//! This module contains Waypoint's route selection and the small router that
//! drives it. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Destinations         │
//!                    │  • Route matching       │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    Bar     │          │    Rail    │
//!             │  surface   │          │  surface   │
//!             │ (ratatui)  │          │ (ratatui)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! Config loading is the one exception to "no I/O"; it runs once at startup.
//!
//! ## Modules
//!
//! - [`destination`]: The `Destination` value type
//! - [`route_matcher`]: `is_route_selected()` — which destinations are active
//! - [`resources`]: Title and icon lookup
//! - [`state`]: The `App` struct — router state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod destination;
pub mod resources;
pub mod route_matcher;
pub mod state;
