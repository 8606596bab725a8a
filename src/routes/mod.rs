pub mod question;
pub mod root;
pub mod submission;
