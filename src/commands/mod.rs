//! Command-line command handlers.
//!
//! One-shot commands that report something and exit, each in its own
//! submodule. The long-running mode loop lives in the `Bulbutil` builder.

pub mod sun;
