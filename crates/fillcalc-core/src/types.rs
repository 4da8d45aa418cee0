use glam::IVec3;

/// A region corner in voxel-space. Fill commands name two opposite corners.
pub type Corner = IVec3;
