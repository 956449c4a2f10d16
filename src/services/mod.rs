pub mod browser;
pub mod browser_controller;
pub mod filter;
pub mod proximity;
pub mod window;

pub use browser::{BrowserState, RenderState};
pub use browser_controller::{BrowserCommand, BrowserController, ControllerClosed};
pub use filter::{FilterState, filter_entities};
pub use proximity::{Bounds, ObserverToken, ProximityObserver, ProximityZone};
pub use window::PageWindow;
