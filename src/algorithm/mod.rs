/// Polygon containment capability and the shipped ray-crossing checker
pub mod containment;
/// Acceptance bitmap over the candidate grid
pub mod mask;
/// Uniform grid scan engine and its results
pub mod tiler;
