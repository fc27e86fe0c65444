//! Travel Checklist
//!
//! Checklist engine for a travel packing list and a board of named todo
//! lists: icon resolution, list state transitions and JSON snapshots in
//! key/value storage. The browser host drives it through the wasm `commands`
//! module.

pub mod domain;
pub mod engine;
pub mod icon;
pub mod repository;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub mod commands;
