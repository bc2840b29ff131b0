pub mod member;
pub mod stream_channel;
