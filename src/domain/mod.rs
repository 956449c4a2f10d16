pub mod country;
pub mod dataset;
pub mod region;

pub use country::{Country, CountryName, Flags};
pub use dataset::DatasetResult;
pub use region::Region;

/// A record the browser can filter and page through.
///
/// `key` is the stable identity used for rendering; `display_name` is what
/// the free-text search looks at and `facet` is the categorical attribute the
/// facet selector matches exactly.
pub trait Browsable {
    fn key(&self) -> &str;
    fn display_name(&self) -> &str;
    fn facet(&self) -> &str;
}
