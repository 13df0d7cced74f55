//! Overlay drawing for detection and pose results.
//!
//! All routines composite in place into a caller-supplied `Mat`. Coordinates
//! falling outside the canvas are clipped by the underlying OpenCV
//! primitives, so partially visible overlays draw without error.

use crate::{
    box_geometry::BoundingBox,
    camera::CameraIntrinsics,
    constants::{
        ANNOTATION_FRONT_DEPTH, ANNOTATION_FRONT_SIZE, ANNOTATION_REAR_DEPTH, ANNOTATION_REAR_SIZE,
        LABEL_FONT_SCALE, MARK_RADIUS,
    },
    utils::safe_cast::{f32_to_i32, f64_to_i32},
    Result,
};
use opencv::{
    calib3d,
    core::{Mat, Point, Point2d, Point2f, Point3d, Rect, Scalar, Vec3d},
    imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8, LINE_AA},
    prelude::*,
};

/// Corner sign pattern shared by both faces of the annotation box
const CORNER_SIGNS: [(f64, f64); 4] = [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)];

/// Draw a detection rectangle with a label above its top-left corner.
///
/// The label gets a filled background so it stays readable on busy frames.
///
/// # Errors
///
/// Returns an error if OpenCV drawing operations fail
pub fn draw_face_box(image: &mut Mat, bbox: &BoundingBox, label: &str) -> Result<()> {
    let green = Scalar::new(0.0, 255.0, 0.0, 0.0);
    imgproc::rectangle(image, bbox.to_rect(), green, 1, LINE_8, 0)?;

    let mut base_line = 0;
    let label_size = imgproc::get_text_size(label, FONT_HERSHEY_SIMPLEX, LABEL_FONT_SCALE, 1, &mut base_line)?;

    let label_background = Rect::new(
        bbox.left,
        bbox.top - label_size.height,
        label_size.width,
        label_size.height + base_line,
    );
    imgproc::rectangle(image, label_background, green, imgproc::FILLED, LINE_8, 0)?;
    imgproc::put_text(
        image,
        label,
        Point::new(bbox.left, bbox.top),
        FONT_HERSHEY_SIMPLEX,
        LABEL_FONT_SCALE,
        Scalar::new(0.0, 0.0, 0.0, 0.0),
        1,
        LINE_8,
        false,
    )?;

    Ok(())
}

/// Draw one filled anti-aliased mark per landmark point.
///
/// # Errors
///
/// Returns an error if a landmark coordinate is not a finite number or if
/// OpenCV drawing operations fail
pub fn draw_marks(image: &mut Mat, marks: &[Point2f], color: Scalar) -> Result<()> {
    for mark in marks {
        let center = Point::new(f32_to_i32(mark.x)?, f32_to_i32(mark.y)?);
        imgproc::circle(image, center, MARK_RADIUS, color, imgproc::FILLED, LINE_AA, 0)?;
    }

    Ok(())
}

/// Draw a 3D box as an annotation of the estimated pose.
///
/// The box has a rear face in the origin plane and a larger front face pushed
/// forward along the z axis. Its corners are projected into image space with
/// the supplied calibration, then the two faces and the four connecting edges
/// are drawn.
///
/// # Errors
///
/// Returns an error if point projection or OpenCV drawing operations fail,
/// or if a projected coordinate is not a finite number
pub fn draw_annotation_box(
    image: &mut Mat,
    rotation_vec: &Vec3d,
    translation_vec: &Vec3d,
    intrinsics: &CameraIntrinsics,
    color: Scalar,
    line_width: i32,
) -> Result<()> {
    let mut point_3d = Vec::with_capacity(8);
    for &(sx, sy) in &CORNER_SIGNS {
        point_3d.push(Point3d::new(
            sx * ANNOTATION_REAR_SIZE,
            sy * ANNOTATION_REAR_SIZE,
            ANNOTATION_REAR_DEPTH,
        ));
    }
    for &(sx, sy) in &CORNER_SIGNS {
        point_3d.push(Point3d::new(
            sx * ANNOTATION_FRONT_SIZE,
            sy * ANNOTATION_FRONT_SIZE,
            ANNOTATION_FRONT_DEPTH,
        ));
    }

    // Project the corners to 2D image space
    let object_points = Mat::from_slice(&point_3d)?;
    let mut image_points = Mat::default();
    calib3d::project_points(
        &object_points,
        rotation_vec,
        translation_vec,
        intrinsics.camera_matrix(),
        intrinsics.dist_coeffs(),
        &mut image_points,
        &mut Mat::default(),
        0.0,
    )?;

    let mut point_2d = Vec::with_capacity(8);
    for i in 0..8 {
        let pt = image_points.at_2d::<Point2d>(i, 0)?;
        point_2d.push(Point::new(f64_to_i32(pt.x)?, f64_to_i32(pt.y)?));
    }

    // Rear face, front face and the edges connecting their corners
    for i in 0..4 {
        let j = (i + 1) % 4;
        imgproc::line(image, point_2d[i], point_2d[j], color, line_width, LINE_AA, 0)?;
        imgproc::line(image, point_2d[i + 4], point_2d[j + 4], color, line_width, LINE_AA, 0)?;
        imgproc::line(image, point_2d[i], point_2d[i + 4], color, line_width, LINE_AA, 0)?;
    }

    Ok(())
}
