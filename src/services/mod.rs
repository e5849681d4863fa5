pub mod avatars;
pub mod faculties;
pub mod students;

pub use avatars::AvatarService;
pub use faculties::FacultyService;
pub use students::StudentService;
