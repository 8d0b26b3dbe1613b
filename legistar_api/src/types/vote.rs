use serde::{Deserialize, Serialize};

/// One recorded vote from `/EventItems/{id}/Votes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vote {
    pub vote_person_name: Option<String>,

    pub vote_value_name: Option<String>,
}
