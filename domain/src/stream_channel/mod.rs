mod input;
mod validation;

pub use input::{
    contains_forbidden_characters, normalize_channel_link, parse_platform, sanitize_input,
    FORBIDDEN_CHARACTERS,
};
pub use validation::{
    validate_stream_channel_changes, StreamChannelValidationError, ValidatedStreamChannel,
    MAX_CHANNEL_LINK_LEN, MAX_NICKNAME_LEN,
};

use async_trait::async_trait;
use domain_shared::member::MemberId;
use domain_shared::stream_channel::PlatformId;
use thiserror::Error;
use tracing::instrument;

/// Live-stream channel configuration of a single member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamChannel {
    pub member_id: MemberId,
    pub nickname: String,
    pub channel_link: String,
    pub platform: Option<PlatformId>,
}

impl StreamChannel {
    #[instrument(level = "trace")]
    pub fn empty(member_id: MemberId) -> Self {
        Self {
            member_id,
            nickname: String::new(),
            channel_link: String::new(),
            platform: None,
        }
    }
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait StreamChannelRepository {
    async fn find_by_member_id(
        &self,
        member_id: MemberId,
    ) -> Result<Option<StreamChannel>, StreamChannelRepositoryError>;

    /// Inserts an empty channel, returns `false` when nothing was inserted.
    async fn create(&self, member_id: MemberId) -> Result<bool, StreamChannelRepositoryError>;

    /// Overwrites the stored fields, returns `false` when no row was changed.
    async fn update(&self, channel: &StreamChannel) -> Result<bool, StreamChannelRepositoryError>;

    async fn delete(&self, member_id: MemberId) -> Result<(), StreamChannelRepositoryError>;
}

#[derive(Debug, Error)]
pub enum StreamChannelRepositoryError {
    #[error("Service is temporarily unavailable")]
    ServiceUnavailable,
}
