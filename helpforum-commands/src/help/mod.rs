pub mod close;
/// Persistent Close button shared by every welcome message.
pub mod close_button;
/// Gateway event handlers for the help forum.
pub mod events;
pub mod topic;
