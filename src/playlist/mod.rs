//! Channel list model for extended M3U playlists.
//!
//! M3U(8) is a de-facto standard (meaning there is no formal standard): each
//! `#EXTINF:` line carries the metadata of one channel and the line right
//! after it is the stream url.
//!
//! <https://en.wikipedia.org/wiki/M3U#File_format>

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const EXTINF_PREFIX: &str = "#EXTINF:";

lazy_static! {
    static ref GROUP_TITLE_REGEX: Regex =
        Regex::new(r#"group-title="([^"]*)""#).expect("group-title regex is valid");
}

/// Stable handle of a parsed channel, assigned in parse order. Selections in
/// the ui are bound to this instead of the display name, as names are not
/// unique in real world playlists. Valid until the next reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub url: String,
}

/// One `group-title` bucket, channels in appearance order. Channels without
/// the attribute collect under the empty title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub title: String,
    pub channels: Vec<Channel>,
}

/// The whole channel list, groups in first-appearance order. Rebuilt
/// wholesale on every load, never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    groups: Vec<Group>,
}

impl Playlist {
    /// Decode the full text of an extended M3U file.
    ///
    /// A `#EXTINF:` line starts one entry: the display name is everything
    /// after the first comma, the group comes from an optional
    /// `group-title="..."` attribute on the same line. The very next line is
    /// the url, taken verbatim, unless it is itself a `#` line. Entries
    /// without a url line are dropped without an error.
    pub fn parse(content: &str) -> Self {
        let mut playlist = Self::default();

        let mut lines = content.lines().peekable();
        while let Some(line) = lines.next() {
            if !line.starts_with(EXTINF_PREFIX) {
                continue;
            }

            let name = line.split_once(',').map_or(line, |(_, name)| name);
            let group = GROUP_TITLE_REGEX
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map_or("", |m| m.as_str());

            // The url candidate is only consumed when it is not a `#` line,
            // so a following `#EXTINF:` still starts its own entry.
            match lines.peek() {
                Some(url) if !url.starts_with('#') => {
                    playlist.push_channel(group, name, url);
                    lines.next();
                }
                Some(_) | None => {
                    warn!("dropping malformed entry without url: {line}");
                }
            }
        }

        playlist
    }

    /// Read and decode a playlist file. On failure the caller keeps whatever
    /// playlist it had.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read playlist {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Append a channel to its group, creating the group on first use. Ids
    /// are handed out in append order, so they double as the running count.
    pub fn push_channel(&mut self, group: &str, name: &str, url: &str) {
        let channel = Channel {
            id: ChannelId(self.len()),
            name: name.to_string(),
            url: url.to_string(),
        };
        match self.groups.iter_mut().find(|g| g.title == group) {
            Some(g) => g.channels.push(channel),
            None => self.groups.push(Group {
                title: group.to_string(),
                channels: vec![channel],
            }),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of channels over all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.channels.len()).sum()
    }

    pub fn get(&self, id: ChannelId) -> Option<&Channel> {
        self.groups
            .iter()
            .flat_map(|g| g.channels.iter())
            .find(|c| c.id == id)
    }

    /// First channel matching a display name, groups in order. Names are not
    /// unique, duplicates after the first are not reachable this way.
    pub fn find_channel(&self, name: &str) -> Option<&Channel> {
        self.groups
            .iter()
            .flat_map(|g| g.channels.iter())
            .find(|c| c.name == name)
    }

    pub fn find_url(&self, name: &str) -> Option<&str> {
        self.find_channel(name).map(|c| c.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_parse_grouped_and_ungrouped() {
        let playlist = Playlist::parse(
            "#EXTINF:-1 group-title=\"News\",CNN\nhttp://a/cnn\n#EXTINF:-1,Local\nhttp://a/local",
        );

        assert_eq!(playlist.groups().len(), 2);
        assert_eq!(playlist.groups()[0].title, "News");
        assert_eq!(playlist.groups()[0].channels[0].name, "CNN");
        assert_eq!(playlist.groups()[0].channels[0].url, "http://a/cnn");
        assert_eq!(playlist.groups()[1].title, "");
        assert_eq!(playlist.groups()[1].channels[0].name, "Local");
        assert_eq!(playlist.groups()[1].channels[0].url, "http://a/local");
    }

    #[test]
    fn should_keep_appearance_order() {
        let playlist = Playlist::parse(
            "#EXTM3U
#EXTINF:-1 group-title=\"Sports\",ESPN
http://a/espn
#EXTINF:-1 group-title=\"News\",CNN
http://a/cnn
#EXTINF:-1 group-title=\"Sports\",Eurosport
http://a/eurosport",
        );

        let titles: Vec<&str> = playlist.groups().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Sports", "News"]);
        let sports: Vec<&str> = playlist.groups()[0]
            .channels
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(sports, vec!["ESPN", "Eurosport"]);
    }

    #[test]
    fn metadata_at_eof_yields_no_channel() {
        let playlist = Playlist::parse("#EXTINF:-1,CNN");
        assert_eq!(playlist.len(), 0);
        assert!(playlist.is_empty());
    }

    #[test]
    fn consecutive_metadata_drops_the_first() {
        let playlist = Playlist::parse("#EXTINF:-1,CNN\n#EXTINF:-1,BBC\nhttp://a/bbc");
        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist.find_url("CNN"), None);
        assert_eq!(playlist.find_url("BBC"), Some("http://a/bbc"));
    }

    #[test]
    fn comment_after_metadata_drops_the_entry() {
        let playlist = Playlist::parse("#EXTINF:-1,CNN\n# a comment\nhttp://a/cnn");
        assert_eq!(playlist.len(), 0);
    }

    #[test]
    fn name_is_everything_after_the_first_comma() {
        let playlist = Playlist::parse("#EXTINF:-1 tvg-id=\"x\",CNN, HD 1080p\nhttp://a/cnn");
        assert_eq!(playlist.groups()[0].channels[0].name, "CNN, HD 1080p");
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_url() {
        let playlist = Playlist::parse(
            "#EXTINF:-1 group-title=\"A\",CNN\nhttp://a/cnn\n#EXTINF:-1 group-title=\"B\",CNN\nhttp://b/cnn",
        );
        assert_eq!(playlist.find_url("CNN"), Some("http://a/cnn"));
    }

    #[test]
    fn lookup_miss_returns_none() {
        let playlist = Playlist::parse("#EXTINF:-1,CNN\nhttp://a/cnn");
        assert_eq!(playlist.find_url("BBC"), None);
    }

    #[test]
    fn channel_ids_are_stable_across_groups() {
        let playlist = Playlist::parse(
            "#EXTINF:-1 group-title=\"News\",CNN\nhttp://a/cnn\n#EXTINF:-1,Local\nhttp://a/local",
        );
        let local = playlist.get(ChannelId(1)).unwrap();
        assert_eq!(local.name, "Local");
        assert_eq!(playlist.get(ChannelId(2)), None);
    }
}
