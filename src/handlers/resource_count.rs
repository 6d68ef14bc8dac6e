use serde::{Deserialize, Serialize};

/// Count endpoints reply with `{"resource": {"count": N}}`; either level
/// may be missing, which reads as an absent count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCount {
    #[serde(rename = "resource", skip_serializing_if = "Option::is_none")]
    wrapper: Option<CountWrapper>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CountWrapper {
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<i64>,
}

impl ResourceCount {
    pub fn count(&self) -> Option<i64> {
        self.wrapper.as_ref().and_then(|w| w.count)
    }
}
