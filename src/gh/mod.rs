mod client;
mod pages;

pub use client::{GhClient, GhError};
pub use pages::Pages;
