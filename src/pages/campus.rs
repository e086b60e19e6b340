use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{BuildingList, CampusMap};
use crate::edge::Edge;

/// The campus paths page: pick two buildings and a color, get the shortest
/// route drawn over the campus map.
#[component]
pub fn Campus() -> impl IntoView {
	let (edges, set_edges) = signal(Vec::<Edge>::new());

	view! {
		<div class="page">
			<h1>"UW Campus Paths"</h1>
			<CampusMap edges=edges />
			<BuildingList on_change={move |value: Vec<Edge>| set_edges.set(value)} />
			<nav>
				<A href="/lines">"Line drawing"</A>
			</nav>
		</div>
	}
}
