pub mod credentials;
pub mod pipeline;
pub mod region;
pub mod trending_service;
pub mod youtube_client;

#[cfg(test)]
pub mod testing;
