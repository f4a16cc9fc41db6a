pub mod chat;
pub mod conversations;
pub mod discover;
pub mod events;
pub mod itineraries;
pub mod posts;
pub mod profiles;
