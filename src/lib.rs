//! Client behaviors for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser once per
//! page load. It wires the mobile menu, the light/dark theme toggle,
//! dismissible alerts, smooth in-page scrolling, scroll-driven reveal
//! effects, and contact form validation. The behaviors are written against
//! the [`dom::Dom`] trait and routed through [`page::Page`], so everything
//! except the `browser` glue runs natively under `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Controller assembly and event dispatch |
//! | [`controllers`] | One controller per page behavior |
//! | [`dom`] | Document trait, in-memory document, selector subset |
//! | [`event`] | Events in, actions out |
//! | [`state`] | Menu and theme flags |
//! | [`timers`] | Keyed deferred tasks and a virtual-clock queue |
//! | [`storage`] | Key-value store for the theme preference |
//! | [`config`] | Selectors, class names, and tunables |
//! | [`error`] | Error types |
//! | `browser` | `web_sys` bindings and the wasm entry point (`hydrate` feature) |

pub mod config;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod event;
pub mod page;
pub mod state;
pub mod storage;
pub mod timers;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod fixture;
