pub mod craft;
pub mod guide;
pub mod market;

pub use craft::CraftPage;
pub use guide::GuidePage;
pub use market::MarketPage;
