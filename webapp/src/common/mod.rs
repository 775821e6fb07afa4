pub mod config;
pub mod images;
pub mod motion;
pub mod session;
pub mod storage;
pub mod style;
