use web_sys::CanvasRenderingContext2d;

use crate::edge::{COORD_MAX, Edge};

const GRID_STEP: f64 = 500.0;

pub fn render(edges: &[Edge], ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, width, height);

	// Edge coordinates live in [0, COORD_MAX]^2; scale them onto the canvas.
	let (sx, sy) = (width / COORD_MAX as f64, height / COORD_MAX as f64);

	draw_grid(ctx, width, height, sx, sy);

	ctx.set_line_width(2.0);
	ctx.set_line_cap("round");
	for edge in edges {
		ctx.set_stroke_style_str(&edge.color);
		ctx.begin_path();
		ctx.move_to(edge.x1 * sx, edge.y1 * sy);
		ctx.line_to(edge.x2 * sx, edge.y2 * sy);
		ctx.stroke();
	}
}

fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64, sx: f64, sy: f64) {
	ctx.set_stroke_style_str("#e0e0e0");
	ctx.set_line_width(1.0);

	let mut mark = GRID_STEP;
	while mark < COORD_MAX as f64 {
		ctx.begin_path();
		ctx.move_to(mark * sx, 0.0);
		ctx.line_to(mark * sx, height);
		ctx.stroke();

		ctx.begin_path();
		ctx.move_to(0.0, mark * sy);
		ctx.line_to(width, mark * sy);
		ctx.stroke();

		mark += GRID_STEP;
	}
}
