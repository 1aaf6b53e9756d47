pub mod action;
pub mod actions;
pub mod config;
pub mod error;
pub mod event;
pub mod platform;
pub mod workflow;
