//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and mounts its own `Sidebar`;
//! rendering details live in `components`.

pub mod gallery;
pub mod home;
pub mod play;
