pub mod scene_root;

pub use scene_root::{ContentRoot, rotate_scene_root};
