pub mod chart_store;
pub mod chat_session;
pub mod dropdown_loader;
pub mod form_state;
pub mod submission;
pub mod survey_service;
pub mod wallet_connector;
