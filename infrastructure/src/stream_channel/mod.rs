mod stream_channel_repository;

pub use stream_channel_repository::PostgresStreamChannelRepository;
