pub(crate) mod corner;
pub(crate) mod ease;
pub(crate) mod pulse;
pub(crate) mod scheduler;
pub(crate) mod tween;
pub(crate) mod waypoints;
