//! TCP listener that feeds accepted connections to the HTTP layer.

pub mod listener;
