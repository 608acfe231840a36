//! Astrokin computes the forward kinematics of free-floating multibody systems: a base body whose
//! pose is given in an inertial frame (for instance a spacecraft) carrying an articulated tree of
//! revolute, prismatic and fixed joints (for instance a robotic manipulator).
//!
//! The main entry point is the
//! [`RobotKinematicsModule`](robot_modules::robot_kinematics_module::RobotKinematicsModule), which
//! turns a base pose and a joint variable vector into the inertial-frame rotation, position and
//! motion axis of every joint and the rotation and position of every link of a
//! [`RobotModelModule`](robot_modules::robot_model_module::RobotModelModule).

pub mod robot_modules;
pub mod utils;
