pub mod hashing;
pub mod text;
