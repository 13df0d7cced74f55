//! Support library for a face-pose-estimation pipeline.
//!
//! This crate collects the stateless helpers such a pipeline calls once per
//! video frame:
//! - bounding-box geometry: translation, squaring, containment checks
//! - conversion of axis-angle rotation vectors into Euler angles, with a
//!   numerically stable branch near gimbal lock
//! - overlay drawing of detection results onto `OpenCV` images: face boxes
//!   with labels, landmark marks, and a projected 3D pose annotation box
//!
//! Detection, landmark inference and pose solving themselves live in the
//! caller; this crate only transforms their outputs.
//!
//! # Examples
//!
//! ```no_run
//! use face_pose_utils::{
//!     box_geometry::BoundingBox,
//!     camera::CameraIntrinsics,
//!     pose_angles::rotation_vector_to_euler,
//!     visualization,
//! };
//! use opencv::core::{Scalar, Vec3d};
//! use opencv::{imgcodecs, prelude::*};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut frame = imgcodecs::imread("frame.jpg", imgcodecs::IMREAD_COLOR)?;
//!
//! // A detector returned a face box; make it square for the landmark model
//! let facebox = BoundingBox::new(120, 80, 260, 290).squared()?;
//! if facebox.is_within(frame.cols(), frame.rows()) {
//!     visualization::draw_face_box(&mut frame, &facebox, "face")?;
//! }
//!
//! // A pose solver returned a rotation vector; report it as Euler angles
//! let angles = rotation_vector_to_euler([0.1, -0.3, 0.05]);
//! let (pitch, yaw, _roll) = angles.to_degrees();
//! println!("Pitch: {pitch:.2}, Yaw: {yaw:.2}");
//!
//! // Draw the 3D pose cue with explicit camera calibration
//! let intrinsics = CameraIntrinsics::from_image_size(frame.cols(), frame.rows())?;
//! visualization::draw_annotation_box(
//!     &mut frame,
//!     &Vec3d::from([0.1, -0.3, 0.05]),
//!     &Vec3d::from([0.0, 0.0, 1000.0]),
//!     &intrinsics,
//!     Scalar::new(255.0, 255.0, 255.0, 0.0),
//!     2,
//! )?;
//! # Ok(())
//! # }
//! ```

/// Bounding-box geometry for face detections
pub mod box_geometry;

/// Camera calibration parameters for pose-cue projection
pub mod camera;

/// Constants used throughout the library
pub mod constants;

/// Error types and result handling
pub mod error;

/// Euler-angle extraction from rotation vectors
pub mod pose_angles;

/// Utility functions for numeric conversions
pub mod utils;

/// Overlay drawing for detection and pose results
pub mod visualization;

pub use error::{Error, Result};
