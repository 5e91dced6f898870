//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod admin_layout;
mod article_card;
mod category_select;
mod confirm_modal;
mod footer;
mod header;
mod pagination_bar;
mod rich_editor;
mod toast;

pub use admin_layout::AdminLayout;
pub use article_card::ArticleCard;
pub use category_select::CategorySelect;
pub use confirm_modal::ConfirmModal;
pub use footer::Footer;
pub use header::Header;
pub use pagination_bar::PaginationBar;
pub use rich_editor::RichEditor;
pub use toast::ToastHost;
