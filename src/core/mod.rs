pub mod data;
pub mod interaction;
pub mod viewport;
