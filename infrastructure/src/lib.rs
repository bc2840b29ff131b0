pub mod database;
pub mod stream_channel;
