use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use crate::edge::Edge;

/// A plain coordinate-plane canvas that draws the current edge list.
///
/// Redraws from scratch whenever `edges` changes; the canvas holds no state
/// of its own.
#[component]
pub fn LineCanvas(
	#[prop(into)] edges: Signal<Vec<Edge>>,
	#[prop(default = 500.0)] width: f64,
	#[prop(default = 500.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let edges = edges.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		render::render(&edges, &ctx, width, height);
	});

	view! { <canvas node_ref=canvas_ref class="line-canvas" /> }
}
