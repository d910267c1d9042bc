// Design tab: option catalogue and theme updates.
// Theme changes never touch the CV content.

pub mod handlers;
pub mod options;
pub mod update;
