// Mentoring pipeline module
pub mod mentor;
