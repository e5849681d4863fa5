pub use super::avatars::Entity as Avatars;
pub use super::faculties::Entity as Faculties;
pub use super::students::Entity as Students;
