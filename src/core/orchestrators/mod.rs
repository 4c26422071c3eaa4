pub mod app_orchestrator;
pub mod feature_orchestrator;
