//! Article search predicates and the rules that build them from search forms.
//!
//! [`ArticlePredicate`] is a storage-independent filter tree. The PostgreSQL
//! repository renders it to SQL.
//!
//! Two entry points build predicates:
//!
//! - [`ArticlePredicate::simple_search`] - the index page keyword box, never fails
//! - [`FullSearch::build`] - the multi-checkbox search form, validated

use crate::error::{AppError, FORM_ERRORS_KEY, FieldErrors};

/// A filter over articles.
///
/// "Contains" variants are case-insensitive substring matches. Predicates over
/// tags and comments are existential, so an article matching through several
/// tags or comments is still returned once.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticlePredicate {
    /// Matches every article.
    All,
    TitleContains(String),
    TextContains(String),
    AuthorContains(String),
    /// Some tag name equals the term, ignoring case.
    TagMatches(String),
    /// Some tag name equals the term exactly.
    TagNamed(String),
    CommentTextContains(String),
    CommentAuthorContains(String),
    /// Logical OR. An empty list matches nothing.
    Any(Vec<ArticlePredicate>),
    /// Logical AND. An empty list matches everything.
    Every(Vec<ArticlePredicate>),
}

impl ArticlePredicate {
    /// Builds an OR, collapsing single-element lists.
    pub fn any(mut parts: Vec<ArticlePredicate>) -> Self {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            ArticlePredicate::Any(parts)
        }
    }

    /// Builds an AND, dropping `All` operands and collapsing trivial lists.
    pub fn every(parts: Vec<ArticlePredicate>) -> Self {
        let mut parts: Vec<_> = parts
            .into_iter()
            .filter(|p| *p != ArticlePredicate::All)
            .collect();

        match parts.len() {
            0 => ArticlePredicate::All,
            1 => parts.remove(0),
            _ => ArticlePredicate::Every(parts),
        }
    }

    /// Keyword search used by the article index.
    ///
    /// A blank or missing term yields [`ArticlePredicate::All`]. Otherwise the
    /// term is matched against the title, the author and the tag names.
    pub fn simple_search(term: Option<&str>) -> Self {
        match normalize_term(term) {
            None => ArticlePredicate::All,
            Some(term) => ArticlePredicate::Any(vec![
                ArticlePredicate::TitleContains(term.to_string()),
                ArticlePredicate::AuthorContains(term.to_string()),
                ArticlePredicate::TagMatches(term.to_string()),
            ]),
        }
    }
}

/// Where a free-text term is looked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextScope {
    pub in_title: bool,
    pub in_text: bool,
    pub in_tags: bool,
    pub in_comment_text: bool,
}

impl TextScope {
    pub fn is_empty(&self) -> bool {
        !(self.in_title || self.in_text || self.in_tags || self.in_comment_text)
    }
}

/// Whose authorship an author term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorScope {
    pub in_article_author: bool,
    pub in_comment_author: bool,
}

impl AuthorScope {
    pub fn is_empty(&self) -> bool {
        !(self.in_article_author || self.in_comment_author)
    }
}

/// A submitted full search form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FullSearch {
    pub text: Option<String>,
    pub text_scope: TextScope,
    pub author: Option<String>,
    pub author_scope: AuthorScope,
}

impl FullSearch {
    /// Validates the form and builds its predicate.
    ///
    /// Text and author predicates are each an OR over the selected scopes and
    /// are combined with AND when both terms are present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when:
    /// - a text term is given without any text scope (`text` field)
    /// - an author term is given without any author scope (`author` field)
    /// - neither term is given (form-level)
    pub fn build(&self) -> Result<ArticlePredicate, AppError> {
        let text = normalize_term(self.text.as_deref());
        let author = normalize_term(self.author.as_deref());

        if text.is_none() && author.is_none() {
            return Err(AppError::invalid_field(FORM_ERRORS_KEY, "Nothing to search"));
        }

        let mut errors = FieldErrors::new();
        if text.is_some() && self.text_scope.is_empty() {
            errors = errors.add("text", "No search field selected");
        }
        if author.is_some() && self.author_scope.is_empty() {
            errors = errors.add("author", "No author field selected");
        }
        if !errors.is_empty() {
            return Err(errors.into_error());
        }

        let mut parts = Vec::with_capacity(2);
        if let Some(term) = text {
            parts.push(self.text_predicate(term));
        }
        if let Some(term) = author {
            parts.push(self.author_predicate(term));
        }

        Ok(ArticlePredicate::every(parts))
    }

    fn text_predicate(&self, term: &str) -> ArticlePredicate {
        let scope = self.text_scope;
        let mut parts = Vec::new();
        if scope.in_title {
            parts.push(ArticlePredicate::TitleContains(term.to_string()));
        }
        if scope.in_text {
            parts.push(ArticlePredicate::TextContains(term.to_string()));
        }
        if scope.in_tags {
            parts.push(ArticlePredicate::TagMatches(term.to_string()));
        }
        if scope.in_comment_text {
            parts.push(ArticlePredicate::CommentTextContains(term.to_string()));
        }
        ArticlePredicate::any(parts)
    }

    fn author_predicate(&self, term: &str) -> ArticlePredicate {
        let scope = self.author_scope;
        let mut parts = Vec::new();
        if scope.in_article_author {
            parts.push(ArticlePredicate::AuthorContains(term.to_string()));
        }
        if scope.in_comment_author {
            parts.push(ArticlePredicate::CommentAuthorContains(term.to_string()));
        }
        ArticlePredicate::any(parts)
    }
}

/// Trims a term and treats blank input as absent.
fn normalize_term(term: Option<&str>) -> Option<&str> {
    term.map(str::trim).filter(|t| !t.is_empty())
}
