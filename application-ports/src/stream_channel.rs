use async_trait::async_trait;
use domain_shared::member::MemberId;
use domain_shared::stream_channel::StreamChannelField;
use thiserror::Error;

#[async_trait]
pub trait StreamChannelPort {
    async fn create_stream_channel(
        &self,
        member_id: MemberId,
    ) -> Result<StreamChannelConfirmation, StreamChannelError>;

    async fn update_stream_channel(
        &self,
        request: UpdateStreamChannelDto,
    ) -> Result<StreamChannelConfirmation, StreamChannelError>;

    /// Stores the request as given, the caller is expected to have blanked its fields.
    async fn clear_stream_channel(
        &self,
        request: UpdateStreamChannelDto,
    ) -> Result<StreamChannelConfirmation, StreamChannelError>;

    /// Always succeeds, deleting a channel that does not exist is not an error.
    async fn delete_stream_channel(
        &self,
        member_id: MemberId,
    ) -> Result<StreamChannelConfirmation, StreamChannelError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStreamChannelDto {
    pub member_id: MemberId,
    pub nickname: String,
    pub channel_link: String,
    pub platform: Option<String>,
}

impl UpdateStreamChannelDto {
    pub fn blank(member_id: MemberId) -> Self {
        Self {
            member_id,
            nickname: String::new(),
            channel_link: String::new(),
            platform: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamChannelConfirmation {
    Created,
    Updated,
    Cleared,
    Deleted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StreamChannelError {
    #[error("Stream channel already exists")]
    AlreadyExists,
    #[error("Stream channel could not be created")]
    CreateFailed,
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
    #[error("Stream channel not found")]
    NotFound,
    #[error("Stream channel could not be updated")]
    UpdateFailed,
    #[error("Stream channel could not be cleared")]
    ClearFailed,
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}
