pub mod avatars;

pub mod faculties;

pub mod students;

pub use avatars::configure_avatar_routes;
pub use faculties::configure_faculty_routes;
pub use students::configure_student_routes;
