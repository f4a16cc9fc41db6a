pub mod conversation;
pub mod event;
pub mod itinerary;
pub mod message;
pub mod post;
pub mod profile;

pub use conversation::Conversation;
pub use event::EventRecord;
pub use itinerary::ItineraryRecord;
pub use message::Message;
pub use post::PostRecord;
pub use profile::Profile;
