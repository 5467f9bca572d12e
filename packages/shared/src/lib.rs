//! Utilities shared by the Ancient Bowling binaries.

pub mod logger;
