use leptos::prelude::*;
use leptos_leaflet::prelude::*;

use crate::edge::Edge;
use crate::geo;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
	"&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// The campus map: an OpenStreetMap tile layer fixed over the UW campus,
/// with one colored polyline per edge of the current route.
///
/// Edges arrive in campus-map pixel coordinates and are converted to
/// latitude/longitude here; the tile layer itself is the mapping library's
/// concern.
#[component]
pub fn CampusMap(#[prop(into)] edges: Signal<Vec<Edge>>) -> impl IntoView {
	view! {
		<div class="campus-map">
			<MapContainer
				center=Position::new(geo::UW_LATITUDE_CENTER, geo::UW_LONGITUDE_CENTER)
				zoom=geo::MAP_ZOOM
				set_view=true
			>
				<TileLayer url=TILE_URL attribution=TILE_ATTRIBUTION />
				{move || {
					edges
						.get()
						.into_iter()
						.map(|edge| {
							let line = positions(&[
								(geo::y_to_latitude(edge.y1), geo::x_to_longitude(edge.x1)),
								(geo::y_to_latitude(edge.y2), geo::x_to_longitude(edge.x2)),
							]);
							view! { <Polyline positions=line color=edge.color.clone() /> }
						})
						.collect_view()
				}}
			</MapContainer>
		</div>
	}
}
