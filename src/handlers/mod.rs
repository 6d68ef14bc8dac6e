pub mod courses;
pub mod resource_count;
pub mod schools;
pub mod sections;
