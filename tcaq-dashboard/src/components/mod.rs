//! Reusable Dioxus RSX components for the PM2.5 dashboard.

mod monthly_table;
mod notice_banner;
mod query_controls;
mod text_card;

pub use monthly_table::MonthlyTable;
pub use notice_banner::NoticeBanner;
pub use query_controls::QueryControls;
pub use text_card::TextCard;
