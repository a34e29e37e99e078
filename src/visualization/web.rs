//! Web dashboard for satorb.
//!
//! Axum server exposing the embedded HTML dashboard, a JSON orbit API
//! and a WebSocket stream of animated [`OrbitSnapshot`]s. Only available
//! with the `web` feature.

use std::sync::Arc;

use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::sync::{broadcast, RwLock};

use super::OrbitSnapshot;
use crate::config::{InputRanges, WebConfig};
use crate::error::SatResult;
use crate::orbit::physics::OrbitRequest;
use crate::orbit::scale::ScaleConfig;
use crate::orbit::units::EARTH_MU;

/// Embedded dashboard page. Styling is intentionally minimal; the page
/// drives the same JSON API any other client would.
const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// Shared state for the web server.
#[derive(Clone)]
pub struct WebState {
    /// Broadcast channel for snapshot updates.
    tx: broadcast::Sender<String>,
    /// The request the animation loop is currently orbiting.
    current: Arc<RwLock<OrbitRequest>>,
    /// Input clamping ranges.
    ranges: InputRanges,
    /// Scaler used for geometry in API responses.
    scale: ScaleConfig,
}

impl Default for WebState {
    fn default() -> Self {
        Self::new(InputRanges::default(), ScaleConfig::default())
    }
}

impl WebState {
    /// Create new web state with a default LEO orbit on display.
    ///
    /// # Panics
    ///
    /// Never panics: the built-in default request is valid.
    #[must_use]
    #[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
    pub fn new(ranges: InputRanges, scale: ScaleConfig) -> Self {
        let (tx, _) = broadcast::channel(100);
        Self {
            tx,
            current: Arc::new(RwLock::new(OrbitRequest::new(1000.0, 400.0).unwrap())),
            ranges,
            scale,
        }
    }

    /// Get a broadcast receiver for snapshot updates.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    /// Replace the request the animation loop follows.
    pub async fn set_current(&self, request: OrbitRequest) {
        *self.current.write().await = request;
    }

    /// The request the animation loop follows.
    pub async fn current(&self) -> OrbitRequest {
        *self.current.read().await
    }
}

/// Query parameters for `/api/orbit`.
#[derive(Debug, Deserialize)]
struct OrbitQuery {
    mass_kg: Option<f64>,
    altitude_km: Option<f64>,
}

/// Web dashboard server.
pub struct WebVisualization {
    state: WebState,
    config: WebConfig,
}

impl WebVisualization {
    /// Create a new web dashboard server.
    #[must_use]
    pub fn new(config: WebConfig, ranges: InputRanges, scale: ScaleConfig) -> Self {
        Self {
            state: WebState::new(ranges, scale),
            config,
        }
    }

    /// Get the router for the web server.
    #[must_use]
    pub fn router(&self) -> Router {
        let state = self.state.clone();
        let ws_state = self.state.clone();
        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route(
                "/api/orbit",
                get(move |query: Query<OrbitQuery>| orbit_handler(query, state.clone())),
            )
            .route(
                "/ws",
                get(move |ws: WebSocketUpgrade| {
                    let state = ws_state.clone();
                    async move { ws.on_upgrade(move |socket| handle_socket(socket, state)) }
                }),
            )
    }

    /// Broadcast a snapshot to all connected clients.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails. A missing audience is fine.
    pub fn broadcast(&self, snapshot: &OrbitSnapshot) -> SatResult<()> {
        let json = snapshot.to_json()?;
        let _ = self.state.tx.send(json);
        Ok(())
    }

    /// Shared state handle for the animation task.
    #[must_use]
    pub fn state(&self) -> WebState {
        self.state.clone()
    }

    /// Get the server port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.config.port
    }

    /// Bind and serve, with the snapshot animation loop running alongside.
    ///
    /// # Errors
    ///
    /// Returns error if the listener cannot bind or the server fails.
    pub async fn serve(self) -> SatResult<()> {
        let addr = format!("0.0.0.0:{}", self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        let state = self.state.clone();
        let interval_ms = self.config.stream_interval_ms;
        let scale = self.state.scale;
        tokio::spawn(async move {
            animation_loop(state, scale, interval_ms).await;
        });

        let router = self.router();
        axum::serve(listener, router).await?;
        Ok(())
    }
}

/// Advance the satellite angle and broadcast snapshots forever.
///
/// Reads the latest request each tick so API updates steer the stream.
async fn animation_loop(state: WebState, scale: ScaleConfig, interval_ms: f64) {
    let mut angle: f64 = 0.0;
    let dt = interval_ms / 1000.0;
    let mut ticker = tokio::time::interval(std::time::Duration::from_millis(interval_ms as u64));

    loop {
        ticker.tick().await;

        let request = state.current().await;
        // Real angular velocity, sped up so one LEO lap takes seconds
        let r = request.altitude().orbital_radius_m();
        let omega = (EARTH_MU / r.powi(3)).sqrt() * 5000.0;
        angle = (angle + omega * dt) % std::f64::consts::TAU;

        let snapshot = OrbitSnapshot::capture(&request, &scale, angle, true);
        if let Ok(json) = snapshot.to_json() {
            let _ = state.tx.send(json);
        }
    }
}

async fn index_handler() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

/// Compute an orbit for the query parameters, clamping them into range,
/// and point the animation stream at the result.
async fn orbit_handler(Query(query): Query<OrbitQuery>, state: WebState) -> impl IntoResponse {
    let mass_kg = state.ranges.clamp_mass(query.mass_kg.unwrap_or(1000.0));
    let altitude_km = state
        .ranges
        .clamp_altitude(query.altitude_km.unwrap_or(400.0));

    match OrbitRequest::new(mass_kg, altitude_km) {
        Ok(request) => {
            state.set_current(request).await;
            let snapshot = OrbitSnapshot::capture(&request, &state.scale, 0.0, false);
            (StatusCode::OK, Json(serde_json::json!(snapshot)))
        }
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": err.to_string() })),
        ),
    }
}

/// Forward broadcast snapshots to one WebSocket client.
async fn handle_socket(mut socket: WebSocket, state: WebState) {
    let mut rx = state.subscribe();
    loop {
        match rx.recv().await {
            Ok(json) => {
                if socket.send(Message::Text(json)).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(_)) => {
                // Slow client: skip ahead to the freshest snapshot
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::orbit::classify::OrbitBand;

    fn visualization() -> WebVisualization {
        WebVisualization::new(
            WebConfig::default(),
            InputRanges::default(),
            ScaleConfig::default(),
        )
    }

    #[test]
    fn test_router_builds() {
        let viz = visualization();
        let _router = viz.router();
        assert_eq!(viz.port(), 8080);
    }

    #[test]
    fn test_broadcast_without_subscribers_is_ok() {
        let viz = visualization();
        let request = OrbitRequest::new(1000.0, 400.0).unwrap();
        let snapshot = OrbitSnapshot::capture(&request, &ScaleConfig::default(), 0.0, false);
        assert!(viz.broadcast(&snapshot).is_ok());
    }

    #[tokio::test]
    async fn test_broadcast_reaches_subscriber() {
        let viz = visualization();
        let mut rx = viz.state().subscribe();

        let request = OrbitRequest::new(2000.0, 20_200.0).unwrap();
        let snapshot = OrbitSnapshot::capture(&request, &ScaleConfig::default(), 0.5, true);
        viz.broadcast(&snapshot).unwrap();

        let json = rx.recv().await.unwrap();
        assert!(json.contains("Meo"));
        assert!(json.contains("\"angle_rad\":0.5"));
    }

    #[tokio::test]
    async fn test_orbit_handler_clamps_and_updates_stream() {
        let state = WebState::default();
        let query = Query(OrbitQuery {
            mass_kg: Some(1e12),
            altitude_km: Some(5.0),
        });

        let _response = orbit_handler(query, state.clone()).await;

        let current = state.current().await;
        assert!((current.mass().as_kg() - 500_000.0).abs() < 1e-6);
        assert!((current.altitude().as_km() - 150.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_orbit_handler_defaults() {
        let state = WebState::default();
        let query = Query(OrbitQuery {
            mass_kg: None,
            altitude_km: None,
        });

        let _response = orbit_handler(query, state.clone()).await;
        let current = state.current().await;
        assert!((current.altitude().as_km() - 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_dashboard_page_embeds_api_calls() {
        assert!(DASHBOARD_HTML.contains("/api/orbit"));
        assert!(DASHBOARD_HTML.contains("/ws"));
    }

    #[test]
    fn test_default_state_is_leo() {
        let state = WebState::default();
        let request = *state.current.blocking_read();
        assert_eq!(
            crate::orbit::classify::classify_orbit(request.altitude().as_km()).band,
            OrbitBand::Leo
        );
    }
}
