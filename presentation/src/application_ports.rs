use application_ports::stream_channel::StreamChannelPort;
use std::sync::Arc;

pub trait Locator {
    fn get_stream_channel_port(&self) -> Arc<dyn StreamChannelPort + Send + Sync>;
}
