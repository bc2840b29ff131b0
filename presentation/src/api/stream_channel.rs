use crate::api::response::{respond, ApiResponse};
use crate::application_ports::Locator;
use application_ports::stream_channel::UpdateStreamChannelDto;
use axum::extract::{Path, State};
use axum::Json;
use domain_shared::member::MemberId;
use serde::Deserialize;
use tracing::instrument;

#[derive(Deserialize, Debug)]
pub struct UpdateStreamChannelRequest {
    #[serde(default)]
    nickname: String,
    #[serde(default)]
    channel_link: String,
    #[serde(default)]
    platform: Option<PlatformInput>,
}

/// Platform as sent by clients, either a JSON number or text.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum PlatformInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl PlatformInput {
    fn into_text(self) -> String {
        match self {
            PlatformInput::Integer(platform) => platform.to_string(),
            PlatformInput::Float(platform) => platform.to_string(),
            PlatformInput::Text(platform) => platform,
        }
    }
}

#[instrument(level = "info", skip(locator))]
pub async fn create_handler<L: Locator>(
    State(locator): State<L>,
    Path(member_id): Path<i64>,
) -> ApiResponse {
    let stream_channel_port = locator.get_stream_channel_port();

    respond(
        stream_channel_port
            .create_stream_channel(MemberId(member_id))
            .await,
    )
}

#[instrument(level = "info", skip(locator))]
pub async fn update_handler<L: Locator>(
    State(locator): State<L>,
    Path(member_id): Path<i64>,
    Json(request): Json<UpdateStreamChannelRequest>,
) -> ApiResponse {
    let stream_channel_port = locator.get_stream_channel_port();
    let UpdateStreamChannelRequest {
        nickname,
        channel_link,
        platform,
    } = request;

    let request = UpdateStreamChannelDto {
        member_id: MemberId(member_id),
        nickname,
        channel_link,
        platform: platform.map(PlatformInput::into_text),
    };

    respond(stream_channel_port.update_stream_channel(request).await)
}

#[instrument(level = "info", skip(locator))]
pub async fn clear_handler<L: Locator>(
    State(locator): State<L>,
    Path(member_id): Path<i64>,
) -> ApiResponse {
    let stream_channel_port = locator.get_stream_channel_port();
    let request = UpdateStreamChannelDto::blank(MemberId(member_id));

    respond(stream_channel_port.clear_stream_channel(request).await)
}

#[instrument(level = "info", skip(locator))]
pub async fn delete_handler<L: Locator>(
    State(locator): State<L>,
    Path(member_id): Path<i64>,
) -> ApiResponse {
    let stream_channel_port = locator.get_stream_channel_port();

    respond(
        stream_channel_port
            .delete_stream_channel(MemberId(member_id))
            .await,
    )
}
