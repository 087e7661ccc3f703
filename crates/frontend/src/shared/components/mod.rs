pub mod breadcrumbs;
pub mod page_header;
pub mod skeleton;

pub use breadcrumbs::{Breadcrumb, Breadcrumbs};
pub use page_header::PageHeader;
pub use skeleton::Skeleton;
