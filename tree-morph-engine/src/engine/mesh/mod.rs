pub mod star_mesh;

pub use star_mesh::build_star_mesh;
