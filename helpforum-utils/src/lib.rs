/// Delayed message cleanup.
pub mod cleanup;
/// Interaction response helpers.
pub mod interaction;
/// Pure command option parsers.
pub mod parse;
/// Member role helpers.
pub mod permissions;
/// Discord implementation of the forum platform port.
pub mod platform;
