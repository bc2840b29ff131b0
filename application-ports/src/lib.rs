pub mod stream_channel;
