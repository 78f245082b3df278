use serde::Serialize;

pub const BASE_VARIANT: &str = "base";
pub const LEGAL_STATUS: &str = "legal";

/// One printing of a card, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCardRecord {
    pub set: String,
    pub code: String,
    pub variant: String,
    pub name: Option<String>,
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub color: Option<String>,
    /// Life for leaders, cost for everything else.
    pub cost_or_life: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life: Option<i64>,
    pub power: i64,
    pub counter: Option<i64>,
    pub block: Option<i64>,
    pub feature: Option<String>,
    pub text: Option<String>,
    pub illustration_url: Option<String>,
    pub status: String,
}

impl NormalizedCardRecord {
    pub fn is_base(&self) -> bool {
        self.variant == BASE_VARIANT
    }
}
