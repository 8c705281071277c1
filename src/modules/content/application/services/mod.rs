pub mod content_service;
pub mod dashboard_service;
pub mod reorder_skills_service;
