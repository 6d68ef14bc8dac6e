use serde::{Deserialize, Serialize};

use crate::client::{PowerSchoolClient, PowerSchoolResult};
use crate::envelope::{Envelope, Resource};
use crate::handlers::resource_count::ResourceCount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,

    #[serde(rename = "course_number")]
    pub number: String,

    #[serde(rename = "course_name")]
    pub name: String,
}

impl Resource for Course {
    const COLLECTION_KEY: &'static str = "courses";
    const ITEM_KEY: &'static str = "course";
}

impl<'a> PowerSchoolClient<'a> {
    pub async fn fetch_courses(
        &mut self,
        school_id: i64,
    ) -> PowerSchoolResult<Option<Vec<Course>>> {
        Ok(self
            .request::<Envelope<Course>>(&format!("/ws/v1/school/{school_id}/course"))
            .await?
            .into_data())
    }

    pub async fn fetch_courses_count(&mut self, school_id: i64) -> PowerSchoolResult<Option<i64>> {
        Ok(self
            .request::<ResourceCount>(&format!("/ws/v1/school/{school_id}/course/count"))
            .await?
            .count())
    }
}
