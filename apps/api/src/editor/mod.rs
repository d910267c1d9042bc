// Content editing: personal details, experience and education lists,
// skills and profile photo. Handlers hold the document write lock for the
// duration of one synchronous mutation.

pub mod handlers;
pub mod operations;
pub mod photo;
pub mod skills;
