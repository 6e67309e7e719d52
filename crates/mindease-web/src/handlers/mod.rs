//! HTTP handlers for all web routes.

pub mod layout;
pub mod pages;
pub mod chat;
pub mod contact;
pub mod dashboard;
pub mod emotion;
pub mod feedback;
pub mod mood;
pub mod sensors;
pub mod system;
