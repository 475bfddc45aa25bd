pub mod bottom_nav;
pub mod case_card;
pub mod currency_bar;
pub mod live_feed;
pub mod screen_header;

pub use bottom_nav::BottomNav;
pub use case_card::CaseCard;
pub use currency_bar::CurrencyBar;
pub use live_feed::LiveFeed;
pub use screen_header::{HeaderIcon, ScreenHeader};
