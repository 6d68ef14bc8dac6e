pub mod client;
pub mod envelope;
pub mod handlers;

pub use client::{
    PowerSchoolClient, PowerSchoolCredentials, PowerSchoolError, PowerSchoolResult,
};
pub use envelope::{Envelope, Resource};
pub use handlers::courses::Course;
pub use handlers::resource_count::ResourceCount;
pub use handlers::schools::School;
pub use handlers::sections::Section;
