//! Calibration between campus map pixels and world coordinates.
//!
//! The route service reports positions in the pixel space of the campus map
//! image; the tile layer wants latitude/longitude. These constants were
//! measured against the UW Seattle campus map and are treated as opaque
//! calibration data.

/// Latitude of the campus map calibration point.
pub const UW_LATITUDE: f64 = 47.658_784_055_111_31;
/// Campus-map y pixel of the calibration point.
pub const UW_LATITUDE_OFFSET: f64 = 807.351_88;
/// Degrees of latitude per campus-map y pixel.
pub const UW_LATITUDE_SCALE: f64 = -0.000_005_767_667_969_3;

/// Longitude of the campus map calibration point.
pub const UW_LONGITUDE: f64 = -122.313_054_008_115_34;
/// Campus-map x pixel of the calibration point.
pub const UW_LONGITUDE_OFFSET: f64 = 1_370.640_8;
/// Degrees of longitude per campus-map x pixel.
pub const UW_LONGITUDE_SCALE: f64 = 0.000_008_480_289_617_65;

/// Where the map view starts out, roughly the middle of campus.
pub const UW_LATITUDE_CENTER: f64 = 47.654_406_277_421_46;
/// See [`UW_LATITUDE_CENTER`].
pub const UW_LONGITUDE_CENTER: f64 = -122.304_769_578_345_02;

/// Initial zoom level of the campus map view.
pub const MAP_ZOOM: f64 = 15.0;

/// Convert a campus-map x pixel to a longitude.
pub fn x_to_longitude(x: f64) -> f64 {
	UW_LONGITUDE + (x - UW_LONGITUDE_OFFSET) * UW_LONGITUDE_SCALE
}

/// Convert a campus-map y pixel to a latitude. Pixel y grows downward, so
/// the scale factor is negative.
pub fn y_to_latitude(y: f64) -> f64 {
	UW_LATITUDE + (y - UW_LATITUDE_OFFSET) * UW_LATITUDE_SCALE
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn calibration_point_maps_to_itself() {
		assert_eq!(x_to_longitude(UW_LONGITUDE_OFFSET), UW_LONGITUDE);
		assert_eq!(y_to_latitude(UW_LATITUDE_OFFSET), UW_LATITUDE);
	}

	#[test]
	fn longitude_grows_eastward_with_x() {
		assert!(x_to_longitude(2000.0) > x_to_longitude(1000.0));
	}

	#[test]
	fn latitude_shrinks_as_pixel_y_grows() {
		assert!(y_to_latitude(2000.0) < y_to_latitude(1000.0));
	}
}
