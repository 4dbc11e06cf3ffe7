pub mod manifest_loader;
pub mod progress;
pub mod texture_loader;

pub use manifest_loader::{ManifestLoader, poll_manifest, start_loading};
pub use progress::LoadingProgress;
pub use texture_loader::{PhotoTextures, check_photo_textures, request_photo_textures};
