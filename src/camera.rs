//! Camera calibration parameters for pose-cue projection.

use crate::{constants::CAMERA_CENTER_FACTOR, utils::safe_cast::usize_to_i32, Result};
use opencv::{core::Mat, prelude::*};

/// Pinhole camera matrix and lens distortion coefficients.
///
/// Calibration is passed explicitly to the drawing routines that project 3D
/// points; the library keeps no global camera state.
#[derive(Debug)]
pub struct CameraIntrinsics {
    camera_matrix: Mat,
    dist_coeffs: Mat,
}

impl CameraIntrinsics {
    /// Wrap caller-supplied calibration.
    ///
    /// `camera_matrix` is expected to be a 3×3 `CV_64F` matrix and
    /// `dist_coeffs` a distortion coefficient vector as produced by camera
    /// calibration.
    #[must_use]
    pub fn new(camera_matrix: Mat, dist_coeffs: Mat) -> Self {
        Self {
            camera_matrix,
            dist_coeffs,
        }
    }

    /// Approximate intrinsics for an uncalibrated camera: focal length equal
    /// to the image width, principal point at the image center, no lens
    /// distortion.
    ///
    /// # Errors
    ///
    /// Returns an error if OpenCV matrix construction fails
    pub fn from_image_size(image_width: i32, image_height: i32) -> Result<Self> {
        log::info!("Initializing camera intrinsics for {image_width}x{image_height} images");

        let focal_length = f64::from(image_width);
        let center = (
            f64::from(image_width) / CAMERA_CENTER_FACTOR,
            f64::from(image_height) / CAMERA_CENTER_FACTOR,
        );

        // Create camera matrix using zeros and then fill it
        let mut camera_matrix = Mat::zeros(3, 3, opencv::core::CV_64F)?.to_mat()?;
        let camera_matrix_data: [f64; 9] = [
            focal_length,
            0.0,
            center.0,
            0.0,
            focal_length,
            center.1,
            0.0,
            0.0,
            1.0,
        ];

        for (idx, &value) in camera_matrix_data.iter().enumerate() {
            let i = idx / 3;
            let j = idx % 3;
            *camera_matrix.at_2d_mut::<f64>(usize_to_i32(i)?, usize_to_i32(j)?)? = value;
        }

        // Assume no lens distortion
        let dist_coeffs = Mat::zeros(4, 1, opencv::core::CV_64F)?.to_mat()?;

        Ok(Self {
            camera_matrix,
            dist_coeffs,
        })
    }

    /// The 3×3 camera matrix
    #[must_use]
    pub fn camera_matrix(&self) -> &Mat {
        &self.camera_matrix
    }

    /// The distortion coefficient vector
    #[must_use]
    pub fn dist_coeffs(&self) -> &Mat {
        &self.dist_coeffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_image_size() {
        let intrinsics = CameraIntrinsics::from_image_size(640, 480).unwrap();

        let matrix = intrinsics.camera_matrix();
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 3);
        assert!((*matrix.at_2d::<f64>(0, 0).unwrap() - 640.0).abs() < f64::EPSILON);
        assert!((*matrix.at_2d::<f64>(0, 2).unwrap() - 320.0).abs() < f64::EPSILON);
        assert!((*matrix.at_2d::<f64>(1, 1).unwrap() - 640.0).abs() < f64::EPSILON);
        assert!((*matrix.at_2d::<f64>(1, 2).unwrap() - 240.0).abs() < f64::EPSILON);
        assert!((*matrix.at_2d::<f64>(2, 2).unwrap() - 1.0).abs() < f64::EPSILON);

        let dist = intrinsics.dist_coeffs();
        assert_eq!(dist.rows(), 4);
        assert_eq!(dist.cols(), 1);
        assert!(dist.at_2d::<f64>(0, 0).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_caller_supplied_calibration() {
        let camera_matrix = Mat::eye(3, 3, opencv::core::CV_64F).unwrap().to_mat().unwrap();
        let dist_coeffs = Mat::zeros(5, 1, opencv::core::CV_64F).unwrap().to_mat().unwrap();
        let intrinsics = CameraIntrinsics::new(camera_matrix, dist_coeffs);

        assert_eq!(intrinsics.camera_matrix().rows(), 3);
        assert_eq!(intrinsics.dist_coeffs().rows(), 5);
    }
}
