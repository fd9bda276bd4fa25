//! Mobile UI pages

pub mod folder;
pub mod home;
pub mod not_found;
pub mod settings;
