use leptos::prelude::*;
use log::debug;

use super::{alert, reload_page};
use crate::edge::{Edge, parse_edges};

/// A text field where the user enters one `x1 y1 x2 y2 color` edge per line,
/// plus the buttons that drive the line-drawing page.
///
/// `on_change` fires with a fresh edge list when Draw accepts the input, and
/// with an empty list on Clear. Invalid input never reaches `on_change`.
#[component]
pub fn EdgeList(#[prop(into)] on_change: Callback<Vec<Edge>>) -> impl IntoView {
	let (text, set_text) = signal(String::new());

	let draw = move |_| match parse_edges(&text.get()) {
		Ok(edges) => {
			debug!("accepted {} edge(s)", edges.len());
			on_change.run(edges);
		}
		Err(err) => alert(&err.to_string()),
	};

	let clear = move |_| {
		set_text.set(String::new());
		on_change.run(Vec::new());
	};

	view! {
		<div class="edge-list">
			<p>"Edges"</p>
			<textarea
				rows=5
				cols=30
				prop:value=move || text.get()
				on:input=move |ev| set_text.set(event_target_value(&ev))
			/>
			<div class="controls">
				<button on:click=draw>"Draw"</button>
				<button on:click=clear>"Clear"</button>
				<button on:click=move |_| reload_page()>"Refresh"</button>
			</div>
		</div>
	}
}
