pub mod chart;
pub mod chat;
pub mod dropdown;
pub mod form;
pub mod survey;
pub mod view;
pub mod wallet;
