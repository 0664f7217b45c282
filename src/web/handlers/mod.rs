//! HTML page handlers.
//!
//! Each handler renders an Askama template. Form submissions redirect with
//! `303 See Other` on success and re-render the form with status 422 when
//! validation fails.

pub mod articles;
pub mod comments;
pub mod search;

pub use articles::{
    add_article_comment_handler, add_article_form_handler, article_detail_handler,
    create_article_handler, delete_article_form_handler, delete_article_handler,
    edit_article_form_handler, index_handler, update_article_handler,
};
pub use comments::{
    add_comment_form_handler, comments_handler, create_comment_handler,
    delete_comment_form_handler, delete_comment_handler, edit_comment_form_handler,
    update_comment_handler,
};
pub use search::{search_page_handler, search_submit_handler};
