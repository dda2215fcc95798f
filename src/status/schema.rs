use serde::{Serialize, Deserialize};

// Every field can be omitted or null

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Response {
    pub status: Option<Data>,

    /// Unix timestamp, can be fractional
    pub updated_at: Option<f64>
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Data {
    pub connectivity: Option<String>,
    pub maintenance: Option<bool>,

    pub features: Option<Features>
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Features {
    pub authentication: Option<String>,
    pub matchmaking: Option<String>,
    pub purchase: Option<String>
}
