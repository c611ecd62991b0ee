pub mod partition;
pub mod review;
pub mod upload;
pub mod video;
