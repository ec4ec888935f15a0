pub mod backend;
pub mod distance;
pub mod point_id;
