//! Pointer-driven scene interaction: mode toggling and photo-frame focus.

pub mod ray;
pub mod scene_click;

pub use scene_click::{ClickTracker, handle_scene_click, update_frame_hover};
