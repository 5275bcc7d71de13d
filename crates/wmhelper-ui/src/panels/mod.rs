pub mod chat;
pub mod help;
pub mod history;
pub mod landing;
pub mod profile;
