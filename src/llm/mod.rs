pub mod client;
pub mod completion;
pub mod tools;
