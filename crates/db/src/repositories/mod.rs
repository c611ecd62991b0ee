//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod partition_repo;
pub mod resource_repo;
pub mod upload_link_repo;
pub mod user_repo;
pub mod video_click_repo;
pub mod video_repo;

pub use partition_repo::PartitionRepo;
pub use resource_repo::ResourceRepo;
pub use upload_link_repo::UploadLinkRepo;
pub use user_repo::UserRepo;
pub use video_click_repo::VideoClickRepo;
pub use video_repo::VideoRepo;
