pub mod scene_manifest;

pub use scene_manifest::SceneManifest;
