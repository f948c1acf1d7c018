use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ActivityPartnerId = String;

/// Links an activity to a partner that runs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPartner {
    pub id: ActivityPartnerId,
    pub activity_id: String,
    pub partner_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPartnerCreate {
    pub activity_id: String,
    pub partner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPartnerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filters for listing links. Sent as query parameters, applied in memory
/// when the local store answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityPartnerQuery {
    pub activity_id: Option<String>,
    pub partner_id: Option<String>,
    pub is_active: Option<bool>,
}

impl ActivityPartnerQuery {
    pub fn matches(&self, link: &ActivityPartner) -> bool {
        self.activity_id.as_ref().map_or(true, |id| *id == link.activity_id)
            && self.partner_id.as_ref().map_or(true, |id| *id == link.partner_id)
            && self.is_active.map_or(true, |active| active == link.is_active)
    }
}
