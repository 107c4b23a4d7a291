//! HTTP handlers

pub mod health;
pub mod contact;
pub mod models;
pub mod generate;
