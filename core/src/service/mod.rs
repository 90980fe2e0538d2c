pub mod calculator;
pub mod events;
pub mod messages;
pub mod settings_service;
