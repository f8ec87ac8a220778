pub mod citation;
pub mod quality;
pub mod research;
