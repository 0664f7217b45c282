//! Comment pages: listing, create, edit and delete.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::forms::{CommentInput, PageQuery};
use crate::domain::pagination::PageRequest;
use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::views::{CommentView, FormErrors, Pager, SelectOption};

#[derive(Template, WebTemplate)]
#[template(path = "comments/index.html")]
pub struct CommentsTemplate {
    pub comments: Vec<CommentView>,
    pub pager: Pager,
}

/// Shared create/update form. The article is picked from a select box.
#[derive(Template, WebTemplate)]
#[template(path = "comments/form.html")]
pub struct CommentFormTemplate {
    pub heading: String,
    pub action: String,
    pub submit: String,
    pub cancel_href: String,
    pub articles: Vec<SelectOption>,
    pub author: String,
    pub text: String,
    pub errors: FormErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "comments/delete.html")]
pub struct CommentDeleteTemplate {
    pub comment: CommentView,
}

/// Lists all comments, newest first.
///
/// # Endpoint
///
/// `GET /comments?page=N`
pub async fn comments_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<CommentsTemplate, WebError> {
    let page = state
        .comment_service
        .list_comments(None, &PageRequest::parse(query.page.as_deref()))
        .await?;
    let pager = Pager::new(&page, "/comments", "");

    Ok(CommentsTemplate {
        comments: page.items.into_iter().map(CommentView::from).collect(),
        pager,
    })
}

/// Renders the empty create form.
///
/// # Endpoint
///
/// `GET /comments/add`
pub async fn add_comment_form_handler(
    State(state): State<AppState>,
) -> Result<CommentFormTemplate, WebError> {
    create_form(&state, CommentInput::default(), FormErrors::default()).await
}

/// Creates a comment and redirects to its article.
///
/// # Endpoint
///
/// `POST /comments/add`
pub async fn create_comment_handler(
    State(state): State<AppState>,
    Form(input): Form<CommentInput>,
) -> Result<Response, WebError> {
    match state.comment_service.create_comment(input.clone()).await {
        Ok(comment) => {
            Ok(Redirect::to(&format!("/articles/{}", comment.article_id)).into_response())
        }
        Err(err) => {
            let errors = FormErrors::from_error(err)?;
            let page = create_form(&state, input, errors).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

async fn create_form(
    state: &AppState,
    form: CommentInput,
    errors: FormErrors,
) -> Result<CommentFormTemplate, WebError> {
    let choices = state.article_service.list_choices().await?;

    Ok(CommentFormTemplate {
        heading: "New comment".to_string(),
        action: "/comments/add".to_string(),
        submit: "Create".to_string(),
        cancel_href: "/comments".to_string(),
        articles: SelectOption::articles(choices, form.article),
        author: form.author,
        text: form.text,
        errors,
    })
}

/// Renders the update form prefilled with the comment.
///
/// # Endpoint
///
/// `GET /comments/{id}/edit`
pub async fn edit_comment_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<CommentFormTemplate, WebError> {
    let comment = state.comment_service.get_comment(id).await?;
    edit_form(&state, id, CommentInput::from_comment(&comment), FormErrors::default()).await
}

/// Updates a comment and redirects to the comment listing.
///
/// # Endpoint
///
/// `POST /comments/{id}/edit`
pub async fn update_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(input): Form<CommentInput>,
) -> Result<Response, WebError> {
    // Unknown comments are a 404 even when the submitted form is invalid.
    state.comment_service.get_comment(id).await?;

    match state.comment_service.update_comment(id, input.clone()).await {
        Ok(_) => Ok(Redirect::to("/comments").into_response()),
        Err(err) => {
            let errors = FormErrors::from_error(err)?;
            let page = edit_form(&state, id, input, errors).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

async fn edit_form(
    state: &AppState,
    id: i64,
    form: CommentInput,
    errors: FormErrors,
) -> Result<CommentFormTemplate, WebError> {
    let choices = state.article_service.list_choices().await?;

    Ok(CommentFormTemplate {
        heading: "Edit comment".to_string(),
        action: format!("/comments/{id}/edit"),
        submit: "Save".to_string(),
        cancel_href: "/comments".to_string(),
        articles: SelectOption::articles(choices, form.article),
        author: form.author,
        text: form.text,
        errors,
    })
}

/// Renders the delete confirmation.
///
/// # Endpoint
///
/// `GET /comments/{id}/delete`
pub async fn delete_comment_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<CommentDeleteTemplate, WebError> {
    let comment = state.comment_service.get_comment(id).await?;
    Ok(CommentDeleteTemplate {
        comment: comment.into(),
    })
}

/// Deletes a comment and redirects to the comment listing.
///
/// # Endpoint
///
/// `POST /comments/{id}/delete`
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, WebError> {
    state.comment_service.delete_comment(id).await?;
    Ok(Redirect::to("/comments"))
}
