//! Backend API clients.

pub mod predict;
