//! Core library for byline: configuration, the durable session store, the
//! articles API client, and the session-gated article workspace.

pub mod api;
pub mod config;
pub mod session;
pub mod workspace;
