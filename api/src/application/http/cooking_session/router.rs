use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    close_session::{__path_close_session, close_session},
    drain_narration_commands::{__path_drain_narration_commands, drain_narration_commands},
    get_session::{__path_get_session, get_session},
    navigate::{__path_next_step, __path_previous_step, next_step, previous_step},
    open_session::{__path_open_session, open_session},
    replace_instructions::{__path_replace_instructions, replace_instructions},
    report_narration_event::{__path_report_narration_event, report_narration_event},
    set_narration::{__path_set_narration, set_narration},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    open_session,
    get_session,
    next_step,
    previous_step,
    set_narration,
    replace_instructions,
    drain_narration_commands,
    report_narration_event,
    close_session
))]
pub struct CookingSessionApiDoc;

pub fn cooking_session_routes(state: AppState) -> Router<AppState> {
    let base = format!("{}/cooking-sessions", state.args.server.root_path);

    Router::new()
        .route(&base, post(open_session))
        .route(
            &format!("{base}/{{session_id}}"),
            get(get_session).delete(close_session),
        )
        .route(&format!("{base}/{{session_id}}/next"), post(next_step))
        .route(
            &format!("{base}/{{session_id}}/previous"),
            post(previous_step),
        )
        .route(
            &format!("{base}/{{session_id}}/narration"),
            put(set_narration),
        )
        .route(
            &format!("{base}/{{session_id}}/instructions"),
            put(replace_instructions),
        )
        .route(
            &format!("{base}/{{session_id}}/narration/commands"),
            get(drain_narration_commands),
        )
        .route(
            &format!("{base}/{{session_id}}/narration/events"),
            post(report_narration_event),
        )
}
