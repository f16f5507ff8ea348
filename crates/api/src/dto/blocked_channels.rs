use serde::Deserialize;

/// Body of `POST /blocked-channels`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct BlockChannelRequest {
    #[serde(rename = "channelName")]
    pub channel_name: Option<String>,
}
