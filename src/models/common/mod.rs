pub mod pagination;
pub mod summary;

pub use pagination::{PaginatedResponse, PaginationInfo, deserialize_double_option, normalize_page};
pub use summary::EntityCounts;
