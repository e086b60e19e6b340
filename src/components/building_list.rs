use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};

use super::{alert, reload_page};
use crate::api;
use crate::edge::Edge;

/// Colors the user may pick for a route. Fixed palette, unlike the
/// free-text page where any color string goes.
const PALETTE: &[&str] = &[
	"red", "green", "blue", "yellow", "purple", "orange", "black",
];

/// Start/end building dropdowns, a color dropdown, and the buttons that
/// drive the campus paths page.
///
/// The building list is fetched once when the component mounts. Find Path
/// validates the three selections, fetches the route, and hands the colored
/// edges to `on_change`; Clear resets the selections and hands over an empty
/// list. A failed request leaves the previous edges untouched.
#[component]
pub fn BuildingList(#[prop(into)] on_change: Callback<Vec<Edge>>) -> impl IntoView {
	let (start, set_start) = signal(String::new());
	let (end, set_end) = signal(String::new());
	let (color, set_color) = signal(String::new());
	let (buildings, set_buildings) = signal(Vec::<String>::new());

	spawn_local(async move {
		match api::fetch_buildings().await {
			Ok(names) => {
				debug!("loaded {} buildings", names.len());
				set_buildings.set(names);
			}
			Err(err) => {
				error!("building list request failed: {err}");
				alert(&err.to_string());
			}
		}
	});

	let find_path = move |_| {
		let (start, end, color) = (start.get(), end.get(), color.get());
		if color.is_empty() {
			alert("Please select a color");
			return;
		}
		if start.is_empty() {
			alert("Please select a start building");
			return;
		}
		if end.is_empty() {
			alert("Please select an end building");
			return;
		}
		if start == end {
			alert("The start and end buildings cannot be the same");
			return;
		}

		spawn_local(async move {
			match api::fetch_route(&start, &end, &color).await {
				Ok(edges) => {
					debug!("route {start} -> {end}: {} segment(s)", edges.len());
					on_change.run(edges);
				}
				Err(err) => {
					error!("route request failed: {err}");
					alert(&err.to_string());
				}
			}
		});
	};

	let clear = move |_| {
		set_start.set(String::new());
		set_end.set(String::new());
		set_color.set(String::new());
		on_change.run(Vec::new());
	};

	view! {
		<div class="building-list">
			<div>
				<h3>"Start Building"</h3>
				<select
					prop:value=move || start.get()
					on:change=move |ev| set_start.set(event_target_value(&ev))
				>
					<option value=""></option>
					{move || {
						buildings
							.get()
							.into_iter()
							.map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
							.collect_view()
					}}
				</select>
			</div>
			<div>
				<h3>"End Building"</h3>
				<select
					prop:value=move || end.get()
					on:change=move |ev| set_end.set(event_target_value(&ev))
				>
					<option value=""></option>
					{move || {
						buildings
							.get()
							.into_iter()
							.map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
							.collect_view()
					}}
				</select>
			</div>
			<div>
				<h3>"Color"</h3>
				<select
					prop:value=move || color.get()
					on:change=move |ev| set_color.set(event_target_value(&ev))
				>
					<option value=""></option>
					{PALETTE
						.iter()
						.map(|name| view! { <option value=*name>{*name}</option> })
						.collect_view()}
				</select>
			</div>
			<div class="controls">
				<button on:click=find_path>"Find Path"</button>
				<button on:click=clear>"Clear"</button>
				<button on:click=move |_| reload_page()>"Refresh"</button>
			</div>
		</div>
	}
}
