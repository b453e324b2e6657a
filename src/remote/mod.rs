//! Fetch the channel list from a remote api instead of a local file.
//!
//! The endpoint returns a flat json array of channels and is protected with
//! http basic auth. The response is folded into the same [`Playlist`] the
//! m3u parser produces, groups in first-appearance order.

use crate::config::RemoteApi;
use crate::playlist::Playlist;
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use ureq::{Agent, AgentBuilder};

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("no remote api configured")]
    NotConfigured,
    #[error("remote request failed: {0}")]
    Request(#[from] Box<ureq::Error>),
    #[error("reading response failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid channel list: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
pub struct RemoteChannel {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub group: String,
}

pub struct Api {
    client: Agent,
    url: String,
    auth_header: String,
}

impl Api {
    pub fn new(config: &RemoteApi) -> Self {
        let client = AgentBuilder::new().timeout(Duration::from_secs(10)).build();
        let credentials =
            general_purpose::STANDARD.encode(format!("{}:{}", config.username, config.password));

        Self {
            client,
            url: config.url.clone(),
            auth_header: format!("Basic {credentials}"),
        }
    }

    /// Download and decode the channel list. The caller keeps its previous
    /// playlist when this fails.
    pub fn fetch(&self) -> Result<Playlist, RemoteError> {
        if self.url.is_empty() {
            return Err(RemoteError::NotConfigured);
        }

        let body = self
            .client
            .get(&self.url)
            .set("Authorization", &self.auth_header)
            .call()
            .map_err(Box::new)?
            .into_string()?;

        let channels: Vec<RemoteChannel> = serde_json::from_str(&body)?;
        Ok(Self::into_playlist(&channels))
    }

    fn into_playlist(channels: &[RemoteChannel]) -> Playlist {
        let mut playlist = Playlist::default();
        for channel in channels {
            playlist.push_channel(&channel.group, &channel.name, &channel.url);
        }
        playlist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_decode_channel_list() {
        let body = r#"[
            {"name": "CNN", "url": "http://a/cnn", "group": "News"},
            {"name": "Local", "url": "http://a/local"}
        ]"#;
        let channels: Vec<RemoteChannel> = serde_json::from_str(body).unwrap();
        let playlist = Api::into_playlist(&channels);

        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.groups()[0].title, "News");
        assert_eq!(playlist.groups()[1].title, "");
        assert_eq!(playlist.find_url("CNN"), Some("http://a/cnn"));
    }
}
