use axum::extract::State;
use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::invite::InviteSummary;
use crate::AppState;

const INVITES_PREFIX: &str = "/api/invites/";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/invites/{player}", get(get_invites))
}

/// The player name is forwarded as-is: an unknown player and a player who
/// invited nobody both produce an empty summary.
async fn get_invites(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<InviteSummary>, AppError> {
    let player = player_from_path(uri.path());
    let invited_players = state.invites.invitees(&player).await?;
    Ok(Json(InviteSummary::from(invited_players)))
}

/// Percent-decodes the `{player}` segment. Bytes that are not valid UTF-8
/// become U+FFFD instead of failing the request.
fn player_from_path(path: &str) -> String {
    let raw = path.strip_prefix(INVITES_PREFIX).unwrap_or_default();
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}
