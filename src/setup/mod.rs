//! Setup wizard
//!
//! Walks the user through every managed setting and produces a brand-new
//! [`Settings`](crate::config::Settings) value to persist.

mod wizard;

pub use wizard::*;
