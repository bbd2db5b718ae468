use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};

use super::AnimalQuery;
use crate::api::AppState;
use crate::models::SearchSession;
use crate::orchestrator::LookupOrchestrator;
use crate::render;

/// Home page. With `animalName`, runs one search and renders the settled session.
pub async fn home(State(state): State<AppState>, Query(query): Query<AnimalQuery>) -> Html<String> {
    let session = match query.animal_name.as_deref() {
        Some(name) => {
            let orchestrator =
                LookupOrchestrator::new(state.providers.clone(), state.narrative_policy);
            orchestrator.run_search(name).await
        }
        None => SearchSession::idle(),
    };
    Html(render::render_search_page(&session))
}

pub async fn kingdom(Path(kingdom): Path<String>) -> (StatusCode, Html<String>) {
    let (html, found) = render::render_kingdom_page(&kingdom);
    (status_for(found), Html(html))
}

pub async fn phylum(Path(phylum): Path<String>) -> Html<String> {
    Html(render::render_phylum_page(&phylum))
}

pub async fn class(Path(class): Path<String>) -> (StatusCode, Html<String>) {
    let (html, found) = render::render_class_page(&class);
    (status_for(found), Html(html))
}

fn status_for(found: bool) -> StatusCode {
    if found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
