//! Template-ready view models.
//!
//! Templates only read plain fields; dates are preformatted, links are
//! prebuilt and optional values are flattened to empty strings.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::entities::{Article, ArticleChoice, Category, Comment, Tag};
use crate::domain::pagination::Page;
use crate::error::{AppError, FORM_ERRORS_KEY};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A tag rendered as a link to the filtered index.
#[derive(Debug, Clone)]
pub struct TagLink {
    pub name: String,
    pub href: String,
}

impl TagLink {
    pub fn new(name: &str) -> Self {
        let query = serde_urlencoded::to_string([("tag", name)]).unwrap_or_default();
        Self {
            name: name.to_string(),
            href: format!("/?{query}"),
        }
    }
}

impl From<Tag> for TagLink {
    fn from(tag: Tag) -> Self {
        TagLink::new(&tag.name)
    }
}

#[derive(Debug, Clone)]
pub struct ArticleView {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub text: String,
    /// Category name, empty when uncategorized.
    pub category: String,
    pub tags: Vec<TagLink>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            tags: article.tags.iter().map(|t| TagLink::new(t)).collect(),
            title: article.title,
            author: article.author,
            text: article.text,
            category: article.category.unwrap_or_default(),
            created_at: article.created_at.format(DATE_FORMAT).to_string(),
            updated_at: article.updated_at.format(DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommentView {
    pub id: i64,
    pub article_id: i64,
    pub article_title: String,
    pub author: String,
    pub text: String,
    pub created_at: String,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            article_id: comment.article_id,
            article_title: comment.article_title,
            author: comment.author,
            text: comment.text,
            created_at: comment.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// An `<option>` of a select box.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Category options preceded by an empty "no category" choice.
    pub fn categories(categories: Vec<Category>, selected: Option<i64>) -> Vec<Self> {
        let mut options = vec![SelectOption {
            value: String::new(),
            label: "---------".to_string(),
            selected: selected.is_none(),
        }];
        options.extend(categories.into_iter().map(|c| SelectOption {
            value: c.id.to_string(),
            selected: selected == Some(c.id),
            label: c.name,
        }));
        options
    }

    /// Article options preceded by an empty placeholder.
    pub fn articles(choices: Vec<ArticleChoice>, selected: Option<i64>) -> Vec<Self> {
        let mut options = vec![SelectOption {
            value: String::new(),
            label: "---------".to_string(),
            selected: selected.is_none(),
        }];
        options.extend(choices.into_iter().map(|c| SelectOption {
            value: c.id.to_string(),
            selected: selected == Some(c.id),
            label: c.title,
        }));
        options
    }
}

/// A numbered pager entry.
#[derive(Debug, Clone)]
pub struct PagerLink {
    pub number: i64,
    pub href: String,
    pub current: bool,
}

/// Pager navigation for one listing page.
///
/// Hrefs are empty when the target does not exist.
#[derive(Debug, Clone, Default)]
pub struct Pager {
    pub visible: bool,
    pub number: i64,
    pub num_pages: i64,
    pub first_href: String,
    pub previous_href: String,
    pub next_href: String,
    pub last_href: String,
    pub links: Vec<PagerLink>,
}

impl Pager {
    /// Builds links as `{path}?page=N{suffix}`, `suffix` carrying the other
    /// query parameters (`&search=...`).
    pub fn new<T>(page: &Page<T>, path: &str, suffix: &str) -> Self {
        let href = |n: i64| format!("{path}?page={n}{suffix}");

        Self {
            visible: page.has_other_pages(),
            number: page.number,
            num_pages: page.num_pages,
            first_href: if page.has_previous() { href(1) } else { String::new() },
            previous_href: if page.has_previous() {
                href(page.previous_page_number())
            } else {
                String::new()
            },
            next_href: if page.has_next() {
                href(page.next_page_number())
            } else {
                String::new()
            },
            last_href: if page.has_next() {
                href(page.num_pages)
            } else {
                String::new()
            },
            links: page
                .page_links()
                .into_iter()
                .map(|link| PagerLink {
                    number: link.number,
                    href: href(link.number),
                    current: link.current,
                })
                .collect(),
        }
    }
}

/// Validation messages keyed by form field.
#[derive(Debug, Clone, Default)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    /// Extracts field messages from a validation error.
    ///
    /// # Errors
    ///
    /// Gives back any other error unchanged.
    pub fn from_error(err: AppError) -> Result<Self, AppError> {
        match err {
            AppError::Validation { details, .. } => Ok(Self::from_details(&details)),
            other => Err(other),
        }
    }

    fn from_details(details: &Value) -> Self {
        let mut fields = BTreeMap::new();
        if let Some(map) = details.as_object() {
            for (field, messages) in map {
                let messages: Vec<String> = messages
                    .as_array()
                    .map(|list| {
                        list.iter()
                            .filter_map(|m| m.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default();
                fields.insert(field.clone(), messages);
            }
        }
        Self { fields }
    }

    /// Messages attached to `field`.
    pub fn field(&self, field: &str) -> Vec<String> {
        self.fields.get(field).cloned().unwrap_or_default()
    }

    /// Form-level messages.
    pub fn form(&self) -> Vec<String> {
        self.field(FORM_ERRORS_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
