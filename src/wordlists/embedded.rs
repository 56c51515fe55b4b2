//! Embedded word lists
//!
//! One word list per level, compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/levels.rs"));
