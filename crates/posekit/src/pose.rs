//! Cartesian robot poses.

use posekit_math::{Frame, Tolerance, Transform, Vec3};
use posekit_rotation::{extract_axis_angle, AxisAngle, AxisAngleExtractor, RotationMatrix};
use serde::{Deserialize, Serialize};

/// Millimetres per metre: frames are modelled in mm, poses are in m.
pub const MM_PER_M: f64 = 1000.0;

/// Position in metres plus axis-angle orientation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// X position (m).
    pub x: f64,
    /// Y position (m).
    pub y: f64,
    /// Z position (m).
    pub z: f64,
    /// Rotation vector, x component.
    pub rx: f64,
    /// Rotation vector, y component.
    pub ry: f64,
    /// Rotation vector, z component.
    pub rz: f64,
}

impl Pose {
    /// Pose from a millimetre position and a rotation.
    pub fn new(position_mm: Vec3, rotation: AxisAngle) -> Self {
        let p = position_mm / MM_PER_M;
        let [rx, ry, rz] = rotation.components();
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
            rx,
            ry,
            rz,
        }
    }

    /// Pose of a target frame given in millimetres in the robot base frame.
    pub fn from_frame(frame: &Frame) -> Self {
        Self::from_frame_with(frame, &AxisAngleExtractor::default())
    }

    /// Like [`Pose::from_frame`], with a configured extractor.
    pub fn from_frame_with(frame: &Frame, extractor: &AxisAngleExtractor) -> Self {
        let placement = Transform::frame_to_frame(&Frame::world_xy(), frame);
        let rotation = extractor.extract(&RotationMatrix::from(&placement));
        Self::new(frame.origin.coords, rotation)
    }

    /// Tool center point offset in millimetres, oriented like `reference`.
    ///
    /// Only the orientation of `reference` is used. The world XY frame means
    /// no rotation.
    pub fn from_offsets(x: f64, y: f64, z: f64, reference: &Frame) -> Self {
        let rotation = if reference.is_world_xy(&Tolerance::DEFAULT) {
            AxisAngle::zero()
        } else {
            extract_axis_angle(&RotationMatrix::from(&reference.to_transform()))
        };
        Self::new(Vec3::new(x, y, z), rotation)
    }

    /// Tool center point offset in millimetres, oriented by `Rx(rx) * Ry(ry) * Rz(rz)`.
    pub fn from_offsets_and_angles(x: f64, y: f64, z: f64, rx: f64, ry: f64, rz: f64) -> Self {
        let r = Transform::concatenate([
            Transform::rotation_x(rx),
            Transform::rotation_y(ry),
            Transform::rotation_z(rz),
        ]);
        Self::new(Vec3::new(x, y, z), extract_axis_angle(&RotationMatrix::from(&r)))
    }

    /// Position in metres.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Orientation as an axis-angle vector.
    pub fn rotation(&self) -> AxisAngle {
        AxisAngle::from_vector(Vec3::new(self.rx, self.ry, self.rz))
    }

    /// `[x, y, z, rx, ry, rz]`.
    pub fn to_array(&self) -> [f64; 6] {
        [self.x, self.y, self.z, self.rx, self.ry, self.rz]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use posekit_math::{DhParameters, Point3};
    use posekit_rotation::ExtractSettings;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_world_frame_pose_is_zero() {
        assert_eq!(Pose::from_frame(&Frame::world_xy()), Pose::default());
    }

    #[test]
    fn test_from_frame_converts_units() {
        let f = Frame::new(Point3::new(250.0, -100.0, 50.0), Vec3::y(), -Vec3::x()).unwrap();
        let pose = Pose::from_frame(&f);
        assert_relative_eq!(pose.position(), Vec3::new(0.25, -0.1, 0.05), epsilon = 1e-12);
        assert_relative_eq!(
            pose.rotation().vector(),
            Vec3::new(0.0, 0.0, FRAC_PI_2),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_tool_pointing_down() {
        // Flipped about X: z axis points at the floor
        let f = Frame::new(Point3::new(400.0, 0.0, 250.0), Vec3::x(), -Vec3::y()).unwrap();
        let [x, y, z, rx, ry, rz] = Pose::from_frame(&f).to_array();
        assert_relative_eq!(x, 0.4);
        assert_eq!((y, z), (0.0, 0.25));
        assert_relative_eq!(rx.abs(), PI, epsilon = 1e-12);
        assert_eq!((ry, rz), (0.0, 0.0));
    }

    #[test]
    fn test_from_frame_with_custom_extractor() {
        let extractor = AxisAngleExtractor::new(ExtractSettings {
            singularity_epsilon: 1e-6,
            identity_epsilon: 1e-6,
            ..ExtractSettings::DEFAULT
        })
        .unwrap();
        // 0.004 rad reads as identity under the default 0.01 tolerance only
        let (s, c) = 0.004f64.sin_cos();
        let f = Frame::new(Point3::origin(), Vec3::new(c, s, 0.0), Vec3::new(-s, c, 0.0)).unwrap();
        assert_eq!(Pose::from_frame(&f).rotation(), AxisAngle::zero());
        assert_relative_eq!(Pose::from_frame_with(&f, &extractor).rz, 0.004, epsilon = 1e-9);
    }

    #[test]
    fn test_from_offsets() {
        let pose = Pose::from_offsets(0.0, 0.0, 120.0, &Frame::world_xy());
        assert_eq!(pose.to_array(), [0.0, 0.0, 0.12, 0.0, 0.0, 0.0]);

        let tilted = Frame::new(Point3::new(9.0, 9.0, 9.0), Vec3::x(), Vec3::z()).unwrap();
        let pose = Pose::from_offsets(10.0, 0.0, 0.0, &tilted);
        assert_relative_eq!(pose.x, 0.01);
        // y axis onto z is a quarter turn about x
        assert_relative_eq!(
            pose.rotation().vector(),
            Vec3::new(FRAC_PI_2, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_from_offsets_and_angles_matches_transform() {
        let pose = Pose::from_offsets_and_angles(0.0, 0.0, 0.0, 0.3, -0.2, 0.9);
        let expected = Transform::concatenate([
            Transform::rotation_x(0.3),
            Transform::rotation_y(-0.2),
            Transform::rotation_z(0.9),
        ]);
        let rebuilt = pose.rotation().to_transform();
        assert_relative_eq!(rebuilt.matrix, expected.matrix, epsilon = 1e-12);

        let single = Pose::from_offsets_and_angles(1.0, 2.0, 3.0, 0.0, 0.0, 0.5);
        assert_relative_eq!(single.position(), Vec3::new(0.001, 0.002, 0.003));
        assert_relative_eq!(single.rz, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_dh_chain_tip_pose() {
        // Planar two-link arm, 300 mm links, elbow at 90 degrees
        let tip = Transform::dh_chain(&[
            DhParameters::new(0.0, 0.0, 300.0, 0.0),
            DhParameters::new(0.0, FRAC_PI_2, 300.0, 0.0),
        ]);
        let frame = Frame::world_xy().transformed(&tip).unwrap();
        let pose = Pose::from_frame(&frame);
        assert_relative_eq!(pose.position(), Vec3::new(0.3, 0.3, 0.0), epsilon = 1e-12);
        assert_relative_eq!(pose.rz, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_serde_json() {
        let rotation = AxisAngle::from_vector(Vec3::new(0.0, PI, 0.0));
        let pose = Pose::new(Vec3::new(100.0, 200.0, 300.0), rotation);
        let json = serde_json::to_string(&pose).unwrap();
        assert!(json.contains("\"z\":0.3"));
        let back: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pose);
    }
}
