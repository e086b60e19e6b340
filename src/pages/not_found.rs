use leptos::prelude::*;
use leptos_router::components::A;

/// 404 fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page">
			<h1>"Not Found"</h1>
			<p>"There is no page here."</p>
			<A href="/">"Back to the campus map"</A>
		</div>
	}
}
