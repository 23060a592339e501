pub mod colors;
pub mod toolbar;
pub mod tools;
