//! Floating and tiling window management for terminal user interfaces.
//!
//! The host UI framework owns the window widgets and implements
//! [`sys::host::HostWindow`] for them. A [`manager::WindowManager`] tracks
//! those windows and assigns every open one a position and size from the
//! active [`layout_engine::LayoutMode`].

pub mod common;
pub mod layout_engine;
pub mod manager;
pub mod model;
pub mod sys;
