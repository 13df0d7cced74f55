//! Utility functions shared by the drawing and camera modules.

pub mod safe_cast;
