pub mod lesson;
pub mod terms;
pub mod user;
