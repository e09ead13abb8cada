//! Hand-off to the surrounding shell.
//!
//! A child process cannot change its parent's working directory, so Drive
//! writes the chosen path to a file the shell wrapper reads back
//! ([`channel`]). Opening an editor is done directly ([`editor`]).

pub mod channel;
pub mod editor;

pub use channel::write_channel;
pub use editor::{launch_editor, split_editor};
