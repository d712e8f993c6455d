//! Lander Asset - Load tracking for images and audio
//!
//! Provides the pieces behind the render load-gate:
//! - `ResourceLoader` - registers assets, counts completions, answers "fully loaded"
//! - `AssetHost` - the platform that actually decodes and buffers files
//! - `AssetHandle` / `AssetSlot` - read and write sides of one asset's payload
//! - `ThreadedHost` - decodes on worker threads with `image` and Kira
//! - `ManualHost` - completes loads on demand, for tests and tools

mod handle;
mod host;
mod loader;
mod manual;
mod threaded;
mod types;

pub use handle::{AssetHandle, AssetSlot};
pub use host::{detect_audio_support, mime_essence, AssetHost};
pub use loader::ResourceLoader;
pub use manual::ManualHost;
pub use threaded::ThreadedHost;
pub use types::{AssetKind, AudioFormat, Completion, LoadProgress, RegisterError};
