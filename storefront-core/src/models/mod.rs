pub mod catalog;
pub mod chat;
pub mod contact;
pub mod content;

pub use catalog::{Brand, CatalogItem, Category, Theme};
pub use chat::{ChatMessage, Sender};
pub use contact::ContactSubmission;
pub use content::{Hero, MediaKind, MediaSlide, Review, Testimonial};
