pub mod plan;
pub mod role;
