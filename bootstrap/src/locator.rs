use application::stream_channel::StreamChannelService;
use application_ports::stream_channel::StreamChannelPort;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct ApplicationPortLocator {
    stream_channel_adapter: Arc<StreamChannelService>,
}

impl ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    pub fn new(stream_channel_adapter: Arc<StreamChannelService>) -> Self {
        Self {
            stream_channel_adapter,
        }
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn get_stream_channel_port(&self) -> Arc<dyn StreamChannelPort + Send + Sync> {
        self.stream_channel_adapter.clone()
    }
}
