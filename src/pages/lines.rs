use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{EdgeList, LineCanvas};
use crate::edge::Edge;

/// The line-drawing page: type edges as text, see them on a plain canvas.
#[component]
pub fn Lines() -> impl IntoView {
	let (edges, set_edges) = signal(Vec::<Edge>::new());

	view! {
		<div class="page">
			<h1>"Line Mapper"</h1>
			<LineCanvas edges=edges />
			<EdgeList on_change={move |value: Vec<Edge>| set_edges.set(value)} />
			<nav>
				<A href="/">"Campus paths"</A>
			</nav>
		</div>
	}
}
