use serde::{Deserialize, Serialize};

use crate::client::{PowerSchoolClient, PowerSchoolResult};
use crate::envelope::{Envelope, Resource};
use crate::handlers::resource_count::ResourceCount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,

    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub dcid: Option<i64>,

    pub expression: String,

    #[serde(rename = "gradebooktype", skip_serializing_if = "Option::is_none")]
    pub gradebook_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_number: Option<i64>,

    /// What PowerSchool displays as the period, e.g. "6(M-F)".
    #[serde(
        rename = "external_expression",
        skip_serializing_if = "Option::is_none"
    )]
    pub period: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_id: Option<i64>,
}

impl Resource for Section {
    const COLLECTION_KEY: &'static str = "sections";
    const ITEM_KEY: &'static str = "section";
}

impl<'a> PowerSchoolClient<'a> {
    pub async fn fetch_sections(
        &mut self,
        school_id: i64,
    ) -> PowerSchoolResult<Option<Vec<Section>>> {
        Ok(self
            .request::<Envelope<Section>>(&format!("/ws/v1/school/{school_id}/section"))
            .await?
            .into_data())
    }

    pub async fn fetch_sections_count(&mut self, school_id: i64) -> PowerSchoolResult<Option<i64>> {
        Ok(self
            .request::<ResourceCount>(&format!("/ws/v1/school/{school_id}/section/count"))
            .await?
            .count())
    }
}
