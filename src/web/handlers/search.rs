//! Full search page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::forms::SearchForm;
use crate::domain::pagination::PageRequest;
use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::views::{ArticleView, FormErrors, Pager};

/// Search form with its results, if a search ran.
#[derive(Template, WebTemplate)]
#[template(path = "articles/search.html")]
pub struct SearchTemplate {
    pub form: SearchForm,
    pub text: String,
    pub author: String,
    pub searched: bool,
    pub count: i64,
    pub articles: Vec<ArticleView>,
    pub pager: Pager,
    pub errors: FormErrors,
}

impl SearchTemplate {
    fn blank(form: SearchForm, errors: FormErrors) -> Self {
        Self {
            text: form.text.clone().unwrap_or_default(),
            author: form.author.clone().unwrap_or_default(),
            form,
            searched: false,
            count: 0,
            articles: Vec::new(),
            pager: Pager::default(),
            errors,
        }
    }
}

/// Full search submitted as a query string.
///
/// # Endpoint
///
/// `GET /articles/search?text=...&in_title=on&author=...&page=N`
///
/// Without any parameter the empty form is shown. An invalid combination
/// re-renders the form with status 422.
pub async fn search_page_handler(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
) -> Result<Response, WebError> {
    run_search(&state, form).await
}

/// Full search submitted as a form body.
///
/// # Endpoint
///
/// `POST /articles/search`
pub async fn search_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, WebError> {
    run_search(&state, form).await
}

async fn run_search(state: &AppState, form: SearchForm) -> Result<Response, WebError> {
    if form.is_blank() {
        return Ok(SearchTemplate::blank(form, FormErrors::default()).into_response());
    }

    let page_request = PageRequest::parse(form.page.as_deref());
    match state
        .search_service
        .search(&form.to_full_search(), &page_request)
        .await
    {
        Ok(page) => {
            let pager = Pager::new(&page, "/articles/search", &form.query_suffix());
            let mut template = SearchTemplate::blank(form, FormErrors::default());
            template.searched = true;
            template.count = page.count;
            template.articles = page.items.into_iter().map(ArticleView::from).collect();
            template.pager = pager;
            Ok(template.into_response())
        }
        Err(err) => {
            let errors = FormErrors::from_error(err)?;
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                SearchTemplate::blank(form, errors),
            )
                .into_response())
        }
    }
}
