use application_ports::stream_channel::{
    StreamChannelConfirmation, StreamChannelError, StreamChannelPort, UpdateStreamChannelDto,
};
use async_trait::async_trait;
use domain::stream_channel::{
    parse_platform, validate_stream_channel_changes, StreamChannel, StreamChannelRepository,
    StreamChannelRepositoryError, StreamChannelValidationError,
};
use domain_shared::member::MemberId;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct StreamChannelService {
    stream_channel_repository: Arc<dyn StreamChannelRepository + Send + Sync>,
}

impl StreamChannelService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(stream_channel_repository: Arc<dyn StreamChannelRepository + Send + Sync>) -> Self {
        Self {
            stream_channel_repository,
        }
    }

    async fn find_stream_channel(
        &self,
        member_id: MemberId,
    ) -> Result<Option<StreamChannel>, StreamChannelError> {
        self.stream_channel_repository
            .find_by_member_id(member_id)
            .await
            .map_err(map_stream_channel_repo_err)
    }
}

#[async_trait]
impl StreamChannelPort for StreamChannelService {
    #[instrument(level = "info", skip(self))]
    async fn create_stream_channel(
        &self,
        member_id: MemberId,
    ) -> Result<StreamChannelConfirmation, StreamChannelError> {
        if self.find_stream_channel(member_id).await?.is_some() {
            warn!(member_id = member_id.0, "Stream channel already exists");
            return Err(StreamChannelError::AlreadyExists);
        }

        match self.stream_channel_repository.create(member_id).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(member_id = member_id.0, "Stream channel could not be created");
                return Err(StreamChannelError::CreateFailed);
            }
            Err(err) => {
                warn!(member_id = member_id.0, error = ?err, "Failed to create stream channel");
                return Err(StreamChannelError::CreateFailed);
            }
        }

        info!(member_id = member_id.0, "Stream channel created");

        Ok(StreamChannelConfirmation::Created)
    }

    #[instrument(level = "info", skip(self))]
    async fn update_stream_channel(
        &self,
        request: UpdateStreamChannelDto,
    ) -> Result<StreamChannelConfirmation, StreamChannelError> {
        let validated = validate_stream_channel_changes(
            request.member_id,
            &request.nickname,
            &request.channel_link,
            request.platform.as_deref(),
        )
        .map_err(map_validation_err)?;

        let member_id = validated.member_id();
        if self.find_stream_channel(member_id).await?.is_none() {
            warn!(member_id = member_id.0, "Stream channel to update not found");
            return Err(StreamChannelError::NotFound);
        }

        let channel = validated.into_stream_channel();
        match self.stream_channel_repository.update(&channel).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(member_id = member_id.0, "Stream channel could not be updated");
                return Err(StreamChannelError::UpdateFailed);
            }
            Err(err) => {
                warn!(member_id = member_id.0, error = ?err, "Failed to update stream channel");
                return Err(StreamChannelError::UpdateFailed);
            }
        }

        info!(
            member_id = member_id.0,
            channel_link = %channel.channel_link,
            "Stream channel updated",
        );

        Ok(StreamChannelConfirmation::Updated)
    }

    #[instrument(level = "info", skip(self))]
    async fn clear_stream_channel(
        &self,
        request: UpdateStreamChannelDto,
    ) -> Result<StreamChannelConfirmation, StreamChannelError> {
        let member_id = request.member_id;
        if self.find_stream_channel(member_id).await?.is_none() {
            warn!(member_id = member_id.0, "Stream channel to clear not found");
            return Err(StreamChannelError::NotFound);
        }

        let channel = StreamChannel {
            member_id,
            platform: request.platform.as_deref().and_then(parse_platform),
            nickname: request.nickname,
            channel_link: request.channel_link,
        };
        match self.stream_channel_repository.update(&channel).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(member_id = member_id.0, "Stream channel could not be cleared");
                return Err(StreamChannelError::ClearFailed);
            }
            Err(err) => {
                warn!(member_id = member_id.0, error = ?err, "Failed to clear stream channel");
                return Err(StreamChannelError::ClearFailed);
            }
        }

        info!(member_id = member_id.0, "Stream channel cleared");

        Ok(StreamChannelConfirmation::Cleared)
    }

    #[instrument(level = "info", skip(self))]
    async fn delete_stream_channel(
        &self,
        member_id: MemberId,
    ) -> Result<StreamChannelConfirmation, StreamChannelError> {
        if let Err(err) = self.stream_channel_repository.delete(member_id).await {
            warn!(member_id = member_id.0, error = ?err, "Failed to delete stream channel");
        } else {
            info!(member_id = member_id.0, "Stream channel deleted");
        }

        Ok(StreamChannelConfirmation::Deleted)
    }
}

#[instrument(level = "trace", skip_all)]
fn map_stream_channel_repo_err(err: StreamChannelRepositoryError) -> StreamChannelError {
    match err {
        StreamChannelRepositoryError::ServiceUnavailable => {
            StreamChannelError::TemporaryUnavailable
        }
    }
}

#[instrument(level = "trace", skip_all)]
fn map_validation_err(err: StreamChannelValidationError) -> StreamChannelError {
    match err {
        StreamChannelValidationError::InvalidCharacters(field) => {
            StreamChannelError::InvalidCharacters(field)
        }
        StreamChannelValidationError::Required(field) => StreamChannelError::Required(field),
        StreamChannelValidationError::InvalidFormat(field) => {
            StreamChannelError::InvalidFormat(field)
        }
        StreamChannelValidationError::TooLong { field, max_len } => {
            StreamChannelError::TooLong { field, max_len }
        }
    }
}
