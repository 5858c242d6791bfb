pub mod file;
pub mod http;
pub mod traits;

pub use file::JsonFileListingService;
pub use http::HttpListingService;
pub use traits::ListingService;
