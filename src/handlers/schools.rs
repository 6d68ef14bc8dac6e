use serde::{Deserialize, Serialize};

use crate::client::{PowerSchoolClient, PowerSchoolResult};
use crate::envelope::{Envelope, Resource};
use crate::handlers::resource_count::ResourceCount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub dcid: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub school_number: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_grade: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_grade: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_school_number: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Addresses>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Phones>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Staffer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_principal: Option<Staffer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Addresses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical: Option<Address>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phones {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<Phone>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staffer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<StafferName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StafferName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Resource for School {
    const COLLECTION_KEY: &'static str = "schools";
    const ITEM_KEY: &'static str = "school";
}

impl<'a> PowerSchoolClient<'a> {
    pub async fn fetch_schools(&mut self) -> PowerSchoolResult<Option<Vec<School>>> {
        Ok(self
            .request::<Envelope<School>>("/ws/v1/district/school")
            .await?
            .into_data())
    }

    pub async fn fetch_schools_count(&mut self) -> PowerSchoolResult<Option<i64>> {
        Ok(self
            .request::<ResourceCount>("/ws/v1/district/school/count")
            .await?
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHOOLS_JSON: &str = r#"
    {
        "schools": {
            "@expansions": "school_boundary, full_time_equivalencies, school_fees_setup",
            "@extensions": "schoolscorefields,c_school_registrar,s_sch_crdc_x",
            "school": [
                {
                    "id": 2,
                    "name": "George Washington High School",
                    "school_number": 3,
                    "low_grade": 9,
                    "high_grade": 12,
                    "alternate_school_number": 0,
                    "addresses": {
                        "physical": {
                            "street": "123 Cherry Tree Ave",
                            "city": "Big City",
                            "state_province": "VT",
                            "postal_code": 12345
                        }
                    },
                    "phones": {
                        "main": {
                            "number": "444-555-1234"
                        }
                    },
                    "principal": {
                        "name": {
                            "first_name": "Thomas",
                            "last_name": "Jefferson"
                        },
                        "email": "tj@gwhs.com"
                    },
                    "assistant_principal": {
                        "name": {
                            "first_name": "John",
                            "last_name": "Adams"
                        },
                        "email": "ja@gwhs.com"
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn decodes_school_collection() {
        let envelope = Envelope::<School>::from_slice(SCHOOLS_JSON.as_bytes()).unwrap();
        let schools = envelope.data().unwrap();

        assert_eq!(schools.len(), 1);
        assert_eq!(schools[0].dcid, Some(2));
        assert_eq!(schools[0].school_number, 3);

        let address = schools[0]
            .addresses
            .as_ref()
            .and_then(|a| a.physical.as_ref())
            .unwrap();
        assert_eq!(address.city.as_deref(), Some("Big City"));

        let principal = schools[0].principal.as_ref().unwrap();
        assert_eq!(
            principal.name.as_ref().unwrap().first_name.as_deref(),
            Some("Thomas")
        );
        assert_eq!(principal.email.as_deref(), Some("tj@gwhs.com"));
    }

    #[test]
    fn absent_nested_chain_yields_absent_leaf() {
        let json = br#"{"schools": {"school": [{"school_number": 7, "addresses": {}}]}}"#;
        let envelope = Envelope::<School>::from_slice(json).unwrap();
        let schools = envelope.data().unwrap();

        assert!(schools[0]
            .addresses
            .as_ref()
            .unwrap()
            .physical
            .is_none());
        assert!(schools[0].phones.is_none());
        assert!(schools[0].principal.is_none());
    }

    #[test]
    fn missing_school_number_fails_decode() {
        let json = br#"{"schools": {"school": [{"id": 2, "name": "GWHS"}]}}"#;
        assert!(Envelope::<School>::from_slice(json).is_err());
    }
}
