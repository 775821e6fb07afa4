pub mod modal;
pub mod navigation;
pub mod portfolio_card;
pub mod quick_links;
pub mod style_modal;
