//! Numerical routines shared across the workspace.

pub mod solvers;
