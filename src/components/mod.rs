//! UI components shared by the two pages.

mod building_list;
mod campus_map;
mod edge_list;
mod line_canvas;

pub use building_list::BuildingList;
pub use campus_map::CampusMap;
pub use edge_list::EdgeList;
pub use line_canvas::LineCanvas;

/// Pop a blocking browser alert. Errors never change view state, they are
/// only announced here.
pub(crate) fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

/// Reload the page, dropping all view state.
pub(crate) fn reload_page() {
	if let Some(window) = web_sys::window() {
		let _ = window.location().reload();
	}
}
