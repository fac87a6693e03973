//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod article_repo;
pub mod dashboard_repo;
pub mod gallery_category_repo;
pub mod gallery_image_repo;
pub mod package_repo;
pub mod setting_repo;
pub mod submission_repo;
pub mod testimonial_repo;
pub mod user_repo;

pub use article_repo::ArticleRepo;
pub use dashboard_repo::DashboardRepo;
pub use gallery_category_repo::GalleryCategoryRepo;
pub use gallery_image_repo::GalleryImageRepo;
pub use package_repo::PackageRepo;
pub use setting_repo::SettingRepo;
pub use submission_repo::SubmissionRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
