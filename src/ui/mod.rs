//! UI module - reusable widgets and the enhance panel

pub mod components;
pub mod panel;
