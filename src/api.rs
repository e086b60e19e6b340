//! Client for the campus path server.
//!
//! Two endpoints, one request per user action, no retries: a failed call is
//! reported to the caller and the current view is left alone.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::edge::Edge;

/// Base URL of the path server. The server runs beside the app during
/// development, so the address is fixed rather than configured.
pub const SERVER_BASE: &str = "http://localhost:4567";

/// Why a call to the path server produced no edges.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("the server answered with status {status}, expected 200")]
	Status { status: u16 },

	#[error("could not reach the path server: {0}")]
	Transport(#[from] gloo_net::Error),

	#[error("the server sent a malformed reply: {0}")]
	Decode(#[from] serde_json::Error),
}

/// One point of a route segment, in campus-map pixel coordinates.
#[derive(Clone, Copy, Debug, Deserialize)]
struct RoutePoint {
	x: f64,
	y: f64,
}

/// One straight stretch of a route. The server also reports a cost per
/// segment; the view has no use for it, so it is left undeclared.
#[derive(Clone, Copy, Debug, Deserialize)]
struct RouteSegment {
	start: RoutePoint,
	end: RoutePoint,
}

#[derive(Clone, Debug, Deserialize)]
struct RouteReply {
	path: Vec<RouteSegment>,
}

/// Fetch the list of building names the server knows about.
pub async fn fetch_buildings() -> Result<Vec<String>, ApiError> {
	let response = Request::get(&format!("{SERVER_BASE}/buildings"))
		.send()
		.await?;
	if !response.ok() {
		return Err(ApiError::Status {
			status: response.status(),
		});
	}
	let body = response.text().await?;
	Ok(serde_json::from_str(&body)?)
}

/// Fetch the route between two buildings, stamping every returned segment
/// with `color`.
pub async fn fetch_route(start: &str, end: &str, color: &str) -> Result<Vec<Edge>, ApiError> {
	let response = Request::get(&format!("{SERVER_BASE}/route-paths"))
		.query([("start", start), ("end", end)])
		.send()
		.await?;
	if !response.ok() {
		return Err(ApiError::Status {
			status: response.status(),
		});
	}
	let body = response.text().await?;
	decode_route(&body, color)
}

/// Decode a route reply body into colored edges.
fn decode_route(body: &str, color: &str) -> Result<Vec<Edge>, ApiError> {
	let reply: RouteReply = serde_json::from_str(body)?;
	Ok(reply
		.path
		.into_iter()
		.map(|segment| Edge {
			x1: segment.start.x,
			y1: segment.start.y,
			x2: segment.end.x,
			y2: segment.end.y,
			color: color.to_string(),
		})
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	// Shaped like the server's reply: a path of costed segments plus
	// summary fields the view never reads.
	const ROUTE_BODY: &str = r#"{
		"start": {"x": 2259.7112, "y": 1715.5273},
		"cost": 974.355,
		"path": [
			{"start": {"x": 2259.7112, "y": 1715.5273},
			 "end": {"x": 2267.9727, "y": 1721.1946},
			 "cost": 10.018},
			{"start": {"x": 2267.9727, "y": 1721.1946},
			 "end": {"x": 2281.2766, "y": 1730.3077},
			 "cost": 16.124}
		]
	}"#;

	#[test]
	fn route_reply_becomes_one_edge_per_segment() {
		let edges = decode_route(ROUTE_BODY, "purple").unwrap();
		assert_eq!(edges.len(), 2);
		assert_eq!(edges[0].x1, 2259.7112);
		assert_eq!(edges[0].y1, 1715.5273);
		assert_eq!(edges[0].x2, edges[1].x1);
		assert_eq!(edges[0].y2, edges[1].y1);
	}

	#[test]
	fn every_route_edge_carries_the_requested_color() {
		let edges = decode_route(ROUTE_BODY, "orange").unwrap();
		assert!(edges.iter().all(|edge| edge.color == "orange"));
	}

	#[test]
	fn empty_path_is_a_valid_reply() {
		let edges = decode_route(r#"{"path": []}"#, "red").unwrap();
		assert_eq!(edges, Vec::new());
	}

	#[test]
	fn garbage_body_is_a_decode_error() {
		let err = decode_route("<html>504 Gateway Timeout</html>", "red").unwrap_err();
		assert!(matches!(err, ApiError::Decode(_)));
	}

	#[test]
	fn building_list_body_decodes_in_server_order() {
		let names: Vec<String> = serde_json::from_str(r#"["CSE", "KNE", "MLR", "BAG"]"#).unwrap();
		assert_eq!(names, vec!["CSE", "KNE", "MLR", "BAG"]);
	}
}
