pub mod cache;
pub mod decode;
pub mod export;
pub mod folder;
