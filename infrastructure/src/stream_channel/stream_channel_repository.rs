use async_trait::async_trait;
use domain::stream_channel::{
    StreamChannel, StreamChannelRepository, StreamChannelRepositoryError,
};
use domain_shared::member::MemberId;
use domain_shared::stream_channel::PlatformId;
use sqlx::{query, query_as, FromRow, PgPool};
use tracing::{instrument, warn};

pub struct PostgresStreamChannelRepository {
    pool: PgPool,
}

impl PostgresStreamChannelRepository {
    #[instrument(level = "trace", skip_all)]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StreamChannelRow {
    member_id: i64,
    nickname: String,
    channel_link: String,
    platform: Option<i64>,
}

impl From<StreamChannelRow> for StreamChannel {
    fn from(row: StreamChannelRow) -> Self {
        StreamChannel {
            member_id: MemberId(row.member_id),
            nickname: row.nickname,
            channel_link: row.channel_link,
            platform: row.platform.map(PlatformId),
        }
    }
}

#[async_trait]
impl StreamChannelRepository for PostgresStreamChannelRepository {
    #[instrument(level = "debug", err, skip(self))]
    async fn find_by_member_id(
        &self,
        member_id: MemberId,
    ) -> Result<Option<StreamChannel>, StreamChannelRepositoryError> {
        let row = query_as::<_, StreamChannelRow>(
            "SELECT member_id, nickname, channel_link, platform FROM stream_channels WHERE member_id = $1",
        )
        .bind(member_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            warn!(error = ?err, "Failed to fetch stream channel");
            StreamChannelRepositoryError::ServiceUnavailable
        })?;

        Ok(row.map(StreamChannel::from))
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn create(&self, member_id: MemberId) -> Result<bool, StreamChannelRepositoryError> {
        let result = query(
            "INSERT INTO stream_channels (member_id) VALUES ($1) ON CONFLICT (member_id) DO NOTHING",
        )
        .bind(member_id.0)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            warn!(error = ?err, "Failed to insert stream channel");
            StreamChannelRepositoryError::ServiceUnavailable
        })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn update(&self, channel: &StreamChannel) -> Result<bool, StreamChannelRepositoryError> {
        let result = query(
            "UPDATE stream_channels SET nickname = $1, channel_link = $2, platform = $3 WHERE member_id = $4",
        )
        .bind(&channel.nickname)
        .bind(&channel.channel_link)
        .bind(channel.platform.map(|platform| platform.0))
        .bind(channel.member_id.0)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            warn!(error = ?err, "Failed to update stream channel");
            StreamChannelRepositoryError::ServiceUnavailable
        })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn delete(&self, member_id: MemberId) -> Result<(), StreamChannelRepositoryError> {
        query("DELETE FROM stream_channels WHERE member_id = $1")
            .bind(member_id.0)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                warn!(error = ?err, "Failed to delete stream channel");
                StreamChannelRepositoryError::ServiceUnavailable
            })?;

        Ok(())
    }
}
