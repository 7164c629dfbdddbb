pub mod allocation_service;
pub mod coach_service;
pub mod dca_service;
pub mod goal_service;
pub mod history_service;
pub mod projection_service;
