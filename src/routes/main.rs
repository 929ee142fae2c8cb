use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;
use serde::Serialize;
use tera::{Context, Tera};

use crate::pagination::{self, PAGE_SIZE_CHOICES, PaginationState, QueryParams};
use crate::repository::in_memory::InMemoryRepository;
use crate::routes::render_template;
use crate::services::main as main_service;

#[derive(Serialize)]
struct PageSizeOption {
    size: usize,
    url: String,
}

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // A query string that fails to parse at all is treated the same as one
    // with unparsable values: the view falls back to the first page.
    let params: QueryParams = serde_html_form::from_str(req.query_string()).unwrap_or_default();
    let state = pagination::decode(&params);

    let page_data = match main_service::load_index_page(repo.get_ref(), state) {
        Ok(page_data) => page_data,
        Err(e) => {
            error!("Failed to load people: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Controls are plain links; each href re-encodes the full parameter map
    // so unrelated query parameters survive every transition.
    let previous_url = page_url(&params, state.previous());
    let next_url = page_url(&params, state.next());
    let page_size_options = PAGE_SIZE_CHOICES
        .iter()
        .map(|&size| PageSizeOption {
            size,
            url: page_url(&params, state.with_page_size(size)),
        })
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("people", &page_data.people);
    context.insert("previous_url", &previous_url);
    context.insert("next_url", &next_url);
    context.insert("page_size_options", &page_size_options);
    context.insert("current_page", "index");

    render_template(&tera, "main/index.html", &context)
}

fn page_url(params: &QueryParams, state: PaginationState) -> String {
    format!(
        "/?{}",
        pagination::to_query_string(&pagination::encode(params, state))
    )
}
