//! Article pages: index, detail, create, edit and delete.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::forms::{ArticleInput, CommentInput, ListQuery, PageQuery};
use crate::domain::entities::Article;
use crate::domain::pagination::PageRequest;
use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::views::{ArticleView, CommentView, FormErrors, Pager, SelectOption, TagLink};

/// Article index with keyword search and tag filter.
#[derive(Template, WebTemplate)]
#[template(path = "articles/index.html")]
pub struct IndexTemplate {
    pub articles: Vec<ArticleView>,
    pub pager: Pager,
    pub search: String,
    pub tag: String,
    pub tags: Vec<TagLink>,
}

/// Article detail with its paginated comments and a comment form.
#[derive(Template, WebTemplate)]
#[template(path = "articles/detail.html")]
pub struct ArticleDetailTemplate {
    pub article: ArticleView,
    pub comments: Vec<CommentView>,
    pub comment_count: i64,
    pub pager: Pager,
    pub comment_author: String,
    pub comment_text: String,
    pub errors: FormErrors,
}

/// Shared create/update form.
#[derive(Template, WebTemplate)]
#[template(path = "articles/form.html")]
pub struct ArticleFormTemplate {
    pub heading: String,
    pub action: String,
    pub submit: String,
    pub cancel_href: String,
    pub form: ArticleInput,
    pub categories: Vec<SelectOption>,
    pub errors: FormErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "articles/delete.html")]
pub struct ArticleDeleteTemplate {
    pub article: ArticleView,
}

/// Renders the article index.
///
/// # Endpoint
///
/// `GET /?search=...&tag=...&page=N`
///
/// The keyword matches titles, authors and tag names; `tag` keeps only
/// articles carrying exactly that tag. Pager links preserve both.
pub async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<IndexTemplate, WebError> {
    let page = state
        .article_service
        .list_articles(
            query.search.as_deref(),
            query.tag_filter(),
            &PageRequest::parse(query.page.as_deref()),
        )
        .await?;
    let tags = state.article_service.list_tags().await?;

    let pager = Pager::new(&page, "/", &query.query_suffix());

    Ok(IndexTemplate {
        articles: page.items.into_iter().map(ArticleView::from).collect(),
        pager,
        tag: query.tag_filter().unwrap_or_default().to_string(),
        search: query.search.unwrap_or_default(),
        tags: tags.into_iter().map(TagLink::from).collect(),
    })
}

/// Renders one article with a page of its comments.
///
/// # Endpoint
///
/// `GET /articles/{id}?page=N`
pub async fn article_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<ArticleDetailTemplate, WebError> {
    let article = state.article_service.get_article(id).await?;
    detail_page(
        &state,
        article,
        &PageRequest::parse(query.page.as_deref()),
        CommentInput::default(),
        FormErrors::default(),
    )
    .await
}

/// Adds a comment from the detail page form.
///
/// # Endpoint
///
/// `POST /articles/{id}/comments`
///
/// Redirects back to the article on success; re-renders the detail page
/// with status 422 otherwise.
pub async fn add_article_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(mut input): Form<CommentInput>,
) -> Result<Response, WebError> {
    let article = state.article_service.get_article(id).await?;
    input.article = Some(article.id);

    match state.comment_service.create_comment(input.clone()).await {
        Ok(_) => Ok(Redirect::to(&format!("/articles/{id}")).into_response()),
        Err(err) => {
            let errors = FormErrors::from_error(err)?;
            let page = detail_page(&state, article, &PageRequest::First, input, errors).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

async fn detail_page(
    state: &AppState,
    article: Article,
    page: &PageRequest,
    comment: CommentInput,
    errors: FormErrors,
) -> Result<ArticleDetailTemplate, WebError> {
    let comments = state
        .comment_service
        .list_comments(Some(article.id), page)
        .await?;
    let pager = Pager::new(&comments, &format!("/articles/{}", article.id), "");

    Ok(ArticleDetailTemplate {
        article: article.into(),
        comment_count: comments.count,
        comments: comments.items.into_iter().map(CommentView::from).collect(),
        pager,
        comment_author: comment.author,
        comment_text: comment.text,
        errors,
    })
}

/// Renders the empty create form.
///
/// # Endpoint
///
/// `GET /articles/add`
pub async fn add_article_form_handler(
    State(state): State<AppState>,
) -> Result<ArticleFormTemplate, WebError> {
    create_form(&state, ArticleInput::default(), FormErrors::default()).await
}

/// Creates an article.
///
/// # Endpoint
///
/// `POST /articles/add`
///
/// Redirects to the new article on success; re-renders the form with
/// status 422 and field messages otherwise.
pub async fn create_article_handler(
    State(state): State<AppState>,
    Form(input): Form<ArticleInput>,
) -> Result<Response, WebError> {
    match state.article_service.create_article(input.clone()).await {
        Ok(article) => Ok(Redirect::to(&format!("/articles/{}", article.id)).into_response()),
        Err(err) => {
            let errors = FormErrors::from_error(err)?;
            let page = create_form(&state, input, errors).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

async fn create_form(
    state: &AppState,
    form: ArticleInput,
    errors: FormErrors,
) -> Result<ArticleFormTemplate, WebError> {
    let categories = state.article_service.list_categories().await?;

    Ok(ArticleFormTemplate {
        heading: "New article".to_string(),
        action: "/articles/add".to_string(),
        submit: "Create".to_string(),
        cancel_href: "/".to_string(),
        categories: SelectOption::categories(categories, form.category),
        form,
        errors,
    })
}

/// Renders the update form prefilled with the article, tags joined by `", "`.
///
/// # Endpoint
///
/// `GET /articles/{id}/edit`
pub async fn edit_article_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ArticleFormTemplate, WebError> {
    let article = state.article_service.get_article(id).await?;
    edit_form(&state, id, ArticleInput::from_article(&article), FormErrors::default()).await
}

/// Updates an article, replacing its tag set.
///
/// # Endpoint
///
/// `POST /articles/{id}/edit`
pub async fn update_article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(input): Form<ArticleInput>,
) -> Result<Response, WebError> {
    match state.article_service.update_article(id, input.clone()).await {
        Ok(article) => Ok(Redirect::to(&format!("/articles/{}", article.id)).into_response()),
        Err(err) => {
            let errors = FormErrors::from_error(err)?;
            // A vanished article should not be re-rendered as an edit form.
            state.article_service.get_article(id).await?;
            let page = edit_form(&state, id, input, errors).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

async fn edit_form(
    state: &AppState,
    id: i64,
    form: ArticleInput,
    errors: FormErrors,
) -> Result<ArticleFormTemplate, WebError> {
    let categories = state.article_service.list_categories().await?;

    Ok(ArticleFormTemplate {
        heading: "Edit article".to_string(),
        action: format!("/articles/{id}/edit"),
        submit: "Save".to_string(),
        cancel_href: format!("/articles/{id}"),
        categories: SelectOption::categories(categories, form.category),
        form,
        errors,
    })
}

/// Renders the delete confirmation.
///
/// # Endpoint
///
/// `GET /articles/{id}/delete`
pub async fn delete_article_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ArticleDeleteTemplate, WebError> {
    let article = state.article_service.get_article(id).await?;
    Ok(ArticleDeleteTemplate {
        article: article.into(),
    })
}

/// Deletes an article with its comments and redirects to the index.
///
/// # Endpoint
///
/// `POST /articles/{id}/delete`
pub async fn delete_article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, WebError> {
    state.article_service.delete_article(id).await?;
    Ok(Redirect::to("/"))
}
