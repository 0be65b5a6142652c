//! Player roster models.
//!
//! The roster owns player identity and display attributes (names, birth
//! date, federation ID). The tournament core only ever reads the stable
//! identifier; display attributes are resolved at presentation time by
//! whoever renders output.

pub mod models;

pub use models::{Player, PlayerId};
