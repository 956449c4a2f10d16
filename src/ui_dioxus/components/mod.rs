pub mod country_card;
pub mod load_more_sentinel;
pub mod region_dropdown;
pub mod search_input;

pub use country_card::CountryCard;
pub use load_more_sentinel::{LayoutTick, LoadMoreSentinel, ScrollViewport, SharedObserver};
pub use region_dropdown::RegionDropdown;
pub use search_input::SearchInput;
