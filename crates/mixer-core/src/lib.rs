pub mod attenuation;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod loading;
pub mod mixer;
pub mod persistence;
pub mod playback;
pub mod source;

pub use attenuation::*;
pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use interaction::{classify_press, drag, press, release, PressTarget, Session};
pub use layout::*;
pub use loading::*;
pub use mixer::*;
pub use persistence::{KeyValueStore, MemoryStore, SourcePatch};
pub use playback::*;
pub use source::*;
