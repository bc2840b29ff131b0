use super::input::{
    contains_forbidden_characters, normalize_channel_link, parse_platform, sanitize_input,
};
use super::StreamChannel;
use domain_shared::member::MemberId;
use domain_shared::stream_channel::{PlatformId, StreamChannelField};
use thiserror::Error;
use tracing::instrument;

pub const MAX_NICKNAME_LEN: usize = 20;
pub const MAX_CHANNEL_LINK_LEN: usize = 50;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StreamChannelValidationError {
    #[error("The {0} contains forbidden characters")]
    InvalidCharacters(StreamChannelField),
    #[error("The {0} is required")]
    Required(StreamChannelField),
    #[error("The {0} has an invalid format")]
    InvalidFormat(StreamChannelField),
    #[error("The {field} must be at most {max_len} characters long")]
    TooLong {
        field: StreamChannelField,
        max_len: usize,
    },
}

/// Sanitized and checked channel fields whose link has not been normalized yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedStreamChannel {
    member_id: MemberId,
    nickname: String,
    channel_link: String,
    platform: PlatformId,
}

impl ValidatedStreamChannel {
    #[instrument(level = "trace", skip(self))]
    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    #[instrument(level = "trace", skip(self))]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    #[instrument(level = "trace", skip(self))]
    pub fn channel_link(&self) -> &str {
        &self.channel_link
    }

    #[instrument(level = "trace", skip(self))]
    pub fn platform(&self) -> PlatformId {
        self.platform
    }

    #[instrument(level = "trace", skip(self))]
    pub fn into_stream_channel(self) -> StreamChannel {
        let channel_link = if self.channel_link.is_empty() {
            self.channel_link
        } else {
            normalize_channel_link(&self.channel_link)
        };

        StreamChannel {
            member_id: self.member_id,
            nickname: self.nickname,
            channel_link,
            platform: Some(self.platform),
        }
    }
}

/// Checks user supplied channel fields, stopping at the first failure.
#[instrument(level = "debug")]
pub fn validate_stream_channel_changes(
    member_id: MemberId,
    nickname: &str,
    channel_link: &str,
    platform: Option<&str>,
) -> Result<ValidatedStreamChannel, StreamChannelValidationError> {
    use StreamChannelField::*;
    use StreamChannelValidationError::*;

    if contains_forbidden_characters(nickname) {
        return Err(InvalidCharacters(Nickname));
    }
    if contains_forbidden_characters(channel_link) {
        return Err(InvalidCharacters(ChannelLink));
    }

    let nickname = sanitize_input(nickname);
    let channel_link = sanitize_input(channel_link);

    if nickname.is_empty() {
        return Err(Required(Nickname));
    }
    if channel_link.is_empty() {
        return Err(Required(ChannelLink));
    }

    let platform = platform.ok_or(Required(Platform))?;
    let platform = parse_platform(platform).ok_or(InvalidFormat(Platform))?;

    if nickname.chars().count() > MAX_NICKNAME_LEN {
        return Err(TooLong {
            field: Nickname,
            max_len: MAX_NICKNAME_LEN,
        });
    }
    if channel_link.chars().count() > MAX_CHANNEL_LINK_LEN {
        return Err(TooLong {
            field: ChannelLink,
            max_len: MAX_CHANNEL_LINK_LEN,
        });
    }

    Ok(ValidatedStreamChannel {
        member_id,
        nickname,
        channel_link,
        platform,
    })
}
