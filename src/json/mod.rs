//! Purpose: Internal JSON parsing boundary shared by the decode and config paths.
//! Exports: `parse` module with decode helpers and failure classification.
//! Role: Single seam for the parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: All JSON decoding in the crate goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
