pub mod error;
pub mod io;
pub mod panel;
pub mod paths;
pub mod prompt;
pub mod relay;
pub mod story;
pub mod suggestion;
pub mod types;
pub mod vendor;

pub use error::{Result, StoryforgeError};
