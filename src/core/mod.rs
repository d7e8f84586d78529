// Core modules shared by the decode, config and reporting paths.
pub mod error;
