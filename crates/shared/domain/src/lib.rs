//! # Domain Models
//!
//! Pure site types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or markup here, just data and the
//! static link tables the components render.

pub mod config;
pub mod constants;
pub mod features;
pub mod links;
