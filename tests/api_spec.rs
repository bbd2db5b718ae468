mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::*;
use critterdex::api::{create_router, AppState};
use critterdex::config::NarrativePolicy;
use critterdex::models::*;

fn setup(fake: FakeProviders) -> (TestServer, std::sync::Arc<std::sync::Mutex<Calls>>) {
    setup_with(fake, |state| state)
}

fn setup_with(
    fake: FakeProviders,
    configure: impl FnOnce(AppState) -> AppState,
) -> (TestServer, std::sync::Arc<std::sync::Mutex<Calls>>) {
    let (providers, calls) = fake.build();
    let app = create_router(configure(AppState::new(providers)));
    (TestServer::new(app).expect("Failed to create test server"), calls)
}

mod images {
    use super::*;
    use critterdex::reference::CONTINENT_IMAGES;

    #[tokio::test]
    async fn serves_every_continent_badge() {
        let (server, _) = setup(FakeProviders::new());

        for (continent, path) in CONTINENT_IMAGES {
            let response = server.get(path).await;

            assert_eq!(response.status_code(), StatusCode::OK, "{} at {}", continent, path);
            assert_eq!(response.header("content-type"), "image/svg+xml");
        }
    }

    #[tokio::test]
    async fn unknown_image_is_404() {
        let (server, _) = setup(FakeProviders::new());

        server
            .get("/images/continents/atlantis.svg")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn uses_the_configured_assets_dir() {
        let (server, _) = setup_with(FakeProviders::new(), |state| {
            state.with_assets_dir("/nonexistent/critterdex-assets")
        });

        server
            .get("/images/continents/africa.svg")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let (server, _) = setup(FakeProviders::new());

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }
}

mod animal {
    use super::*;

    #[tokio::test]
    async fn returns_the_first_matching_record() {
        let (server, calls) = setup(FakeProviders::new().with_animal(lion()));

        let response = server
            .get("/api/animal")
            .add_query_param("animalName", "lion")
            .await;

        response.assert_status_ok();
        let record: TaxonomyRecord = response.json();
        assert_eq!(record.name, "Lion");
        assert_eq!(record.taxonomy.family, "Felidae");
        assert!(record.summary.is_none());
        assert!(calls.lock().unwrap().narrative.is_empty());
    }

    #[tokio::test]
    async fn rejects_missing_name() {
        let (server, calls) = setup(FakeProviders::new());

        let response = server.get("/api/animal").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&serde_json::json!({ "error": "Animal name is required" }));
        assert_eq!(calls.lock().unwrap().total(), 0);
    }

    #[tokio::test]
    async fn rejects_blank_name() {
        let (server, _) = setup(FakeProviders::new());

        let response = server
            .get("/api/animal")
            .add_query_param("animalName", "  ")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn returns_404_for_unknown_animals() {
        let (server, _) = setup(FakeProviders::new());

        let response = server
            .get("/api/animal")
            .add_query_param("animalName", "flerbnoggin")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&serde_json::json!({ "error": "Animal not found" }));
    }

    #[tokio::test]
    async fn hides_provider_failures_behind_500() {
        let (server, _) = setup(
            FakeProviders::new().failing_taxonomy(TaxonomyFailure::Status(503)),
        );

        let response = server
            .get("/api/animal")
            .add_query_param("animalName", "lion")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Internal server error");
        assert!(!response.text().contains("upstream exploded"));
    }

    #[tokio::test]
    async fn attaches_summary_when_inline_summaries_are_enabled() {
        let (server, calls) = setup_with(
            FakeProviders::new().with_animal(lion()).with_narrative("Lions live in prides."),
            |state| state.with_inline_summary(true),
        );

        let response = server
            .get("/api/animal")
            .add_query_param("animalName", "lion")
            .await;

        response.assert_status_ok();
        let record: TaxonomyRecord = response.json();
        assert_eq!(record.summary.as_deref(), Some("Lions live in prides."));
        assert_eq!(
            calls.lock().unwrap().narrative,
            vec![("Lion".to_string(), PromptMode::Factual)]
        );
    }

    #[tokio::test]
    async fn omits_empty_inline_summary() {
        let (server, _) = setup_with(
            FakeProviders::new().with_animal(lion()).with_narrative(""),
            |state| state.with_inline_summary(true),
        );

        let response = server
            .get("/api/animal")
            .add_query_param("animalName", "lion")
            .await;

        let body: serde_json::Value = response.json();
        assert!(body.get("summary").is_none());
    }
}

mod animal_image {
    use super::*;

    #[tokio::test]
    async fn returns_png_inline_with_realistic_prompt_by_default() {
        let (server, calls) = setup(FakeProviders::new());

        let response = server
            .get("/api/animal/image")
            .add_query_param("animalName", "lion")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "image/png");
        assert_eq!(
            response.header("content-disposition"),
            "inline; filename=\"lion.png\""
        );
        assert_eq!(response.as_bytes().as_ref(), &[0x89, b'P', b'N', b'G']);
        assert_eq!(
            calls.lock().unwrap().illustration,
            vec![("lion".to_string(), PromptMode::Factual)]
        );
    }

    #[tokio::test]
    async fn uses_fanciful_prompt_only_for_literal_false() {
        let (server, calls) = setup(FakeProviders::new());

        server
            .get("/api/animal/image")
            .add_query_param("animalName", "flerbnoggin")
            .add_query_param("isRealAnimal", "false")
            .await
            .assert_status_ok();
        server
            .get("/api/animal/image")
            .add_query_param("animalName", "lion")
            .add_query_param("isRealAnimal", "no")
            .await
            .assert_status_ok();

        assert_eq!(
            calls.lock().unwrap().illustration,
            vec![
                ("flerbnoggin".to_string(), PromptMode::Fanciful),
                ("lion".to_string(), PromptMode::Factual),
            ]
        );
    }

    #[tokio::test]
    async fn reports_generation_failure() {
        let (server, _) = setup(FakeProviders::new().failing_illustrations());

        let response = server
            .get("/api/animal/image")
            .add_query_param("animalName", "lion")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&serde_json::json!({ "error": "Image generation failed" }));
    }

    #[tokio::test]
    async fn rejects_missing_name() {
        let (server, _) = setup(FakeProviders::new());

        server
            .get("/api/animal/image")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

mod animal_summary {
    use super::*;

    #[tokio::test]
    async fn returns_fanciful_description_as_json_string() {
        let (server, calls) = setup(FakeProviders::new());

        let response = server
            .get("/api/animal/summary")
            .add_query_param("animalName", "flerbnoggin")
            .await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!("A goose with the legs of a horse."));
        assert_eq!(
            calls.lock().unwrap().narrative,
            vec![("flerbnoggin".to_string(), PromptMode::Fanciful)]
        );
    }

    #[tokio::test]
    async fn returns_empty_string_when_generation_fails() {
        let (server, _) = setup(FakeProviders::new().with_narrative(""));

        let response = server
            .get("/api/animal/summary")
            .add_query_param("animalName", "flerbnoggin")
            .await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!(""));
    }

    #[tokio::test]
    async fn supports_factual_mode() {
        let (server, calls) = setup(FakeProviders::new());

        server
            .get("/api/animal/summary")
            .add_query_param("animalName", "Lion")
            .add_query_param("mode", "factual")
            .await
            .assert_status_ok();

        assert_eq!(
            calls.lock().unwrap().narrative,
            vec![("Lion".to_string(), PromptMode::Factual)]
        );
    }

    #[tokio::test]
    async fn rejects_missing_name() {
        let (server, _) = setup(FakeProviders::new());

        server
            .get("/api/animal/summary")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn home_renders_search_form() {
        let (server, calls) = setup(FakeProviders::new());

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(response.text().contains("<h1>Animal Taxonomy</h1>"));
        assert_eq!(calls.lock().unwrap().total(), 0);
    }

    #[tokio::test]
    async fn home_runs_a_search_and_renders_results() {
        let (server, _) = setup(FakeProviders::new().with_animal(lion()));

        let response = server.get("/").add_query_param("animalName", "lion").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h1>Lion Taxonomy</h1>"));
        assert!(html.contains("<a href=\"/kingdom/Animalia\">Animalia</a>"));
        assert!(html.contains("src=\"data:image/png;base64,"));
    }

    #[tokio::test]
    async fn home_renders_unknown_animal_notice_and_narrative() {
        let (server, _) = setup(FakeProviders::new());

        let response = server
            .get("/")
            .add_query_param("animalName", "flerbnoggin")
            .await;

        let html = response.text();
        assert!(html.contains("&quot;flerbnoggin&quot;"));
        assert!(html.contains("A goose with the legs of a horse."));
    }

    #[tokio::test]
    async fn home_uses_configured_narrative_policy() {
        let (server, calls) = setup_with(FakeProviders::new().with_animal(lion()), |state| {
            state.with_narrative_policy(NarrativePolicy::Always)
        });

        server
            .get("/")
            .add_query_param("animalName", "lion")
            .await
            .assert_status_ok();

        assert_eq!(calls.lock().unwrap().narrative.len(), 1);
    }

    #[tokio::test]
    async fn home_shows_error_banner_on_provider_failure() {
        let (server, _) = setup(
            FakeProviders::new().failing_taxonomy(TaxonomyFailure::Transport),
        );

        let response = server.get("/").add_query_param("animalName", "lion").await;

        assert!(response.text().contains("<p class=\"error\">API error</p>"));
    }

    #[tokio::test]
    async fn home_hides_upstream_error_details() {
        let (server, _) = setup(
            FakeProviders::new().failing_taxonomy(TaxonomyFailure::Status(500)),
        );

        let response = server.get("/").add_query_param("animalName", "lion").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("The taxonomy service is unavailable (HTTP 500)"));
        assert!(!html.contains("upstream exploded"));
    }

    #[tokio::test]
    async fn kingdom_page_lists_phyla() {
        let (server, _) = setup(FakeProviders::new());

        let response = server.get("/kingdom/Animalia").await;

        response.assert_status_ok();
        assert!(response.text().contains("<a href=\"/phylum/Chordata\">Chordata</a>"));
    }

    #[tokio::test]
    async fn unknown_kingdom_is_404() {
        let (server, _) = setup(FakeProviders::new());

        let response = server.get("/kingdom/Bacteria").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("Invalid kingdom Bacteria"));
    }

    #[tokio::test]
    async fn phylum_page_falls_back_to_placeholder() {
        let (server, _) = setup(FakeProviders::new());

        let response = server.get("/phylum/Nematoda").await;

        response.assert_status_ok();
        assert!(response.text().contains("Information about phylum Nematoda."));
    }

    #[tokio::test]
    async fn class_page_is_case_insensitive() {
        let (server, _) = setup(FakeProviders::new());

        server.get("/class/MAMMALIA").await.assert_status_ok();
        server
            .get("/class/aves")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
