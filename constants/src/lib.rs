pub mod camera;
pub mod gesture;
pub mod palette;
pub mod scene;
