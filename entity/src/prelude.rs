pub use super::booking::Entity as Booking;
pub use super::destination::Entity as Destination;
pub use super::newsletter_notification::Entity as NewsletterNotification;
pub use super::review::Entity as Review;
pub use super::subscriber::Entity as Subscriber;
pub use super::user::Entity as User;
