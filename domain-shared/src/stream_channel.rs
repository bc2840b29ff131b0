use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PlatformId(pub i64);

/// User-editable fields of a stream channel, used to tell validation failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamChannelField {
    Nickname,
    ChannelLink,
    Platform,
}

impl fmt::Display for StreamChannelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamChannelField::Nickname => f.write_str("nickname"),
            StreamChannelField::ChannelLink => f.write_str("channel link"),
            StreamChannelField::Platform => f.write_str("platform"),
        }
    }
}
