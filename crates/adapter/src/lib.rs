mod cache;
mod catalog;
mod flash;
mod notify;

pub use cache::{post_tag, CacheInvalidator, TagCache};
pub use catalog::translate;
pub use flash::{FlashMessage, FlashMessenger, RoutingKey};
pub use notify::NotificationHub;
