//! Engine test support utilities
//!
//! Shared helpers for the engine's integration tests. Currently this is the
//! unified tracing initialization used by every test binary.

pub mod test_logging;
