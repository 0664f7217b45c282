//! Submitted forms and query strings shared by the web and API layers.
//!
//! Form structs deserialize from `application/x-www-form-urlencoded` bodies
//! and query strings. Field rules are declared with `validator`; services call
//! [`validator::Validate::validate`] after trimming, so every entry point
//! enforces the same rules.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Article, Comment};
use crate::domain::search::{AuthorScope, FullSearch, TextScope};
use crate::domain::tags::{MAX_TAG_LENGTH, format_tag_names, parse_tag_names};

const REQUIRED: &str = "This field is required.";

/// Article create/update form.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "text_differs_from_title", skip_on_field_errors = false))]
pub struct ArticleInput {
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "validate_author"))]
    pub author: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub text: String,

    /// Category id; an empty select value means "no category".
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<i64>,

    /// Comma-separated tag names.
    #[serde(default)]
    #[validate(custom(function = "validate_tags"))]
    pub tags: String,
}

impl ArticleInput {
    /// Form prefilled with an article's current values.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            author: article.author.clone(),
            text: article.text.clone(),
            category: article.category_id,
            tags: format_tag_names(&article.tags),
        }
    }

    /// Strips surrounding whitespace from every text field.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            text: self.text.trim().to_string(),
            category: self.category,
            tags: self.tags.trim().to_string(),
        }
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let length = title.chars().count();
    if length == 0 {
        return Err(error("required", REQUIRED));
    }
    if length <= 10 {
        return Err(error("too_short", "Title is too short!"));
    }
    if length > 200 {
        return Err(error("too_long", "Title is too long (max 200 characters)."));
    }
    Ok(())
}

fn validate_author(author: &str) -> Result<(), ValidationError> {
    let length = author.chars().count();
    if length == 0 {
        return Err(error("required", REQUIRED));
    }
    if length > 40 {
        return Err(error(
            "too_long",
            "Author name is too long (max 40 characters).",
        ));
    }
    Ok(())
}

fn validate_tags(tags: &str) -> Result<(), ValidationError> {
    if parse_tag_names(tags)
        .iter()
        .any(|name| name.chars().count() > MAX_TAG_LENGTH)
    {
        return Err(error(
            "tag_too_long",
            "Each tag must be at most 50 characters long.",
        ));
    }
    Ok(())
}

fn text_differs_from_title(input: &ArticleInput) -> Result<(), ValidationError> {
    if !input.title.is_empty() && input.text == input.title {
        return Err(error(
            "text_duplicates_title",
            "Text of the article should not duplicate its title!",
        ));
    }
    Ok(())
}

/// Comment create/update form.
///
/// The article comment box on the detail page omits `article`; the handler
/// fills it from the path.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentInput {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(required(message = "This field is required."))]
    pub article: Option<i64>,

    #[serde(default)]
    #[validate(custom(function = "validate_author"))]
    pub author: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub text: String,
}

impl CommentInput {
    /// Form prefilled with a comment's current values.
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            article: Some(comment.article_id),
            author: comment.author.clone(),
            text: comment.text.clone(),
        }
    }

    /// Strips surrounding whitespace from every text field.
    pub fn trimmed(self) -> Self {
        Self {
            article: self.article,
            author: self.author.trim().to_string(),
            text: self.text.trim().to_string(),
        }
    }
}

/// Index listing query: keyword search, tag filter and page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl ListQuery {
    /// Non-blank tag filter.
    pub fn tag_filter(&self) -> Option<&str> {
        self.tag.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Query string fragment (`&search=...`) preserving filters across pages.
    pub fn query_suffix(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search));
        }
        if let Some(tag) = self.tag_filter() {
            pairs.push(("tag", tag));
        }
        query_suffix(&pairs)
    }
}

/// A bare `?page=` query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

/// Full search form, submitted as a query string or a form body.
///
/// Checkboxes are set by `on`, `true`, `1` or `yes` and unset otherwise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub in_title: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub in_text: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub in_tags: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub in_comment_text: bool,

    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "checkbox")]
    pub in_article_author: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub in_comment_author: bool,

    #[serde(default)]
    pub page: Option<String>,
}

impl SearchForm {
    /// True when no search parameter at all was submitted.
    ///
    /// Used to show the blank form instead of a "nothing to search" error.
    pub fn is_blank(&self) -> bool {
        self.text.is_none()
            && self.author.is_none()
            && !(self.in_title
                || self.in_text
                || self.in_tags
                || self.in_comment_text
                || self.in_article_author
                || self.in_comment_author)
    }

    pub fn to_full_search(&self) -> FullSearch {
        FullSearch {
            text: self.text.clone(),
            text_scope: TextScope {
                in_title: self.in_title,
                in_text: self.in_text,
                in_tags: self.in_tags,
                in_comment_text: self.in_comment_text,
            },
            author: self.author.clone(),
            author_scope: AuthorScope {
                in_article_author: self.in_article_author,
                in_comment_author: self.in_comment_author,
            },
        }
    }

    /// Query string fragment (`&text=...&in_title=on`) for pager links.
    pub fn query_suffix(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(text) = self.text.as_deref() {
            pairs.push(("text", text));
        }
        for (name, set) in [
            ("in_title", self.in_title),
            ("in_text", self.in_text),
            ("in_tags", self.in_tags),
            ("in_comment_text", self.in_comment_text),
        ] {
            if set {
                pairs.push((name, "on"));
            }
        }
        if let Some(author) = self.author.as_deref() {
            pairs.push(("author", author));
        }
        for (name, set) in [
            ("in_article_author", self.in_article_author),
            ("in_comment_author", self.in_comment_author),
        ] {
            if set {
                pairs.push((name, "on"));
            }
        }
        query_suffix(&pairs)
    }
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.is_some_and(|v| {
        let v = v.trim();
        ["on", "true", "1", "yes"]
            .iter()
            .any(|accepted| v.eq_ignore_ascii_case(accepted))
    }))
}

fn query_suffix(pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    match serde_urlencoded::to_string(pairs) {
        Ok(encoded) => format!("&{encoded}"),
        Err(_) => String::new(),
    }
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    fn valid_article() -> ArticleInput {
        ArticleInput {
            title: "A perfectly fine title".to_string(),
            author: "alice".to_string(),
            text: "Some body text".to_string(),
            category: None,
            tags: "Food, Drink".to_string(),
        }
    }

    fn details(input: &ArticleInput) -> serde_json::Value {
        match AppError::from(input.validate().unwrap_err()) {
            AppError::Validation { details, .. } => details,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_valid_article_passes() {
        assert!(valid_article().validate().is_ok());
    }

    #[test]
    fn test_title_of_ten_chars_is_too_short() {
        let mut input = valid_article();
        input.title = "0123456789".to_string();
        assert_eq!(details(&input)["title"], json!(["Title is too short!"]));

        input.title = "01234567890".to_string();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        let mut input = valid_article();
        input.title = "привет мир".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_text_equal_to_title_is_form_error() {
        let mut input = valid_article();
        input.text = input.title.clone();
        assert_eq!(
            details(&input)["__all__"],
            json!(["Text of the article should not duplicate its title!"])
        );
    }

    #[test]
    fn test_missing_fields_are_required() {
        let input = ArticleInput::default();
        let d = details(&input);
        assert_eq!(d["title"], json!(["This field is required."]));
        assert_eq!(d["author"], json!(["This field is required."]));
        assert_eq!(d["text"], json!(["This field is required."]));
    }

    #[test]
    fn test_overlong_tag_is_rejected() {
        let mut input = valid_article();
        input.tags = format!("ok, {}", "x".repeat(51));
        assert!(details(&input).get("tags").is_some());
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        let input = ArticleInput {
            title: "  A perfectly fine title  ".to_string(),
            author: " alice ".to_string(),
            text: "\nbody\n".to_string(),
            category: Some(1),
            tags: " a, b ".to_string(),
        }
        .trimmed();

        assert_eq!(input.title, "A perfectly fine title");
        assert_eq!(input.author, "alice");
        assert_eq!(input.text, "body");
        assert_eq!(input.tags, "a, b");
    }

    #[test]
    fn test_from_article_joins_tags() {
        let article = Article::new(
            1,
            "A perfectly fine title".to_string(),
            "alice".to_string(),
            "body".to_string(),
            chrono::Utc::now(),
        )
        .with_category(2, "General")
        .with_tags(["Drink", "Food"]);

        let form = ArticleInput::from_article(&article);

        assert_eq!(form.tags, "Drink, Food");
        assert_eq!(form.category, Some(2));
    }

    #[test]
    fn test_article_form_decoding_empty_category() {
        let input: ArticleInput = serde_urlencoded::from_str(
            "title=A+perfectly+fine+title&author=al&text=body&category=&tags=Food%2C+Drink",
        )
        .unwrap();

        assert_eq!(input.category, None);
        assert_eq!(input.tags, "Food, Drink");
    }

    #[test]
    fn test_comment_requires_article() {
        let input = CommentInput {
            article: None,
            author: "bob".to_string(),
            text: "hi".to_string(),
        };
        let err = AppError::from(input.validate().unwrap_err());
        assert_eq!(
            err.to_error_info().details["article"],
            json!(["This field is required."])
        );
    }

    #[test]
    fn test_search_form_checkboxes() {
        let form: SearchForm =
            serde_urlencoded::from_str("text=cat&in_title=on&in_text=TRUE&in_tags=off").unwrap();

        assert!(form.in_title);
        assert!(form.in_text);
        assert!(!form.in_tags);
        assert!(!form.in_comment_text);
        assert!(!form.is_blank());

        let search = form.to_full_search();
        assert!(search.text_scope.in_title);
        assert!(search.author_scope.is_empty());
    }

    #[test]
    fn test_search_form_blank() {
        let form: SearchForm = serde_urlencoded::from_str("page=2").unwrap();
        assert!(form.is_blank());
    }

    #[test]
    fn test_search_form_query_suffix() {
        let form: SearchForm =
            serde_urlencoded::from_str("text=big+cat&in_title=on&page=3").unwrap();
        assert_eq!(form.query_suffix(), "&text=big+cat&in_title=on");
    }

    #[test]
    fn test_list_query_suffix_skips_blank_values() {
        let query = ListQuery {
            search: Some("  ".to_string()),
            tag: Some("Food".to_string()),
            page: Some("2".to_string()),
        };
        assert_eq!(query.query_suffix(), "&tag=Food");
        assert_eq!(ListQuery::default().query_suffix(), "");
    }
}
