pub mod orbit_camera;

pub use orbit_camera::{OrbitCamera, Viewpoint, camera_controller, update_viewpoint};
