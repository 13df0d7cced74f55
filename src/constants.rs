//! Constants used throughout the library

/// Singularity threshold for gimbal-lock detection in Euler-angle extraction
pub const GIMBAL_LOCK_EPSILON: f64 = 1e-6;

/// Camera matrix center factor (principal point at the image center)
pub const CAMERA_CENTER_FACTOR: f64 = 2.0;

/// Half side length of the rear face of the 3D pose annotation box
pub const ANNOTATION_REAR_SIZE: f64 = 75.0;

/// Depth of the rear face of the 3D pose annotation box
pub const ANNOTATION_REAR_DEPTH: f64 = 0.0;

/// Half side length of the front face of the 3D pose annotation box
pub const ANNOTATION_FRONT_SIZE: f64 = 100.0;

/// Depth of the front face of the 3D pose annotation box
pub const ANNOTATION_FRONT_DEPTH: f64 = 100.0;

/// Default line width for overlay drawing
pub const DEFAULT_LINE_WIDTH: i32 = 2;

/// Radius of a single landmark mark
pub const MARK_RADIUS: i32 = 1;

/// Font scale for detection box labels
pub const LABEL_FONT_SCALE: f64 = 0.5;
