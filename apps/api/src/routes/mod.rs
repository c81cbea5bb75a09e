pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::gateway::handlers as gateway;
use crate::roadmap::handlers as roadmap;
use crate::saves::handlers as saves;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Proxy Gateway
        .route("/api/onet", get(gateway::handle_proxy))
        // Catalog
        .route("/api/careers", get(catalog::handle_all_careers))
        .route("/api/careers/search", get(catalog::handle_search_careers))
        .route("/api/careers/:code", get(catalog::handle_career_detail))
        .route("/api/industries", get(catalog::handle_industries))
        .route(
            "/api/industries/:code/careers",
            get(catalog::handle_industry_careers),
        )
        .route(
            "/api/interest-profiler/questions",
            get(catalog::handle_profiler_questions),
        )
        .route(
            "/api/interest-profiler/results",
            post(catalog::handle_profiler_results),
        )
        .route(
            "/api/interest-profiler/careers",
            get(catalog::handle_matching_careers),
        )
        .route("/api/job-zones", get(catalog::handle_job_zones))
        .route("/api/job-zones/:id", get(catalog::handle_job_zone))
        // Roadmaps
        .route(
            "/api/roadmaps/generate",
            post(roadmap::handle_generate_roadmap),
        )
        // Saves (authenticated)
        .route(
            "/api/saves/career",
            post(saves::handle_save_career)
                .get(saves::handle_list_careers)
                .delete(saves::handle_delete_career),
        )
        .route("/api/saves/check", get(saves::handle_check_saved))
        .route(
            "/api/saves/roadmap",
            post(saves::handle_save_roadmap)
                .get(saves::handle_list_roadmaps)
                .delete(saves::handle_delete_roadmap),
        )
        .route(
            "/api/saves/roadmap/:id",
            get(saves::handle_get_roadmap).patch(saves::handle_update_completed_skills),
        )
        .with_state(state)
}
