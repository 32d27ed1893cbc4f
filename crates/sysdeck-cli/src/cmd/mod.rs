pub mod config;
pub mod doctor;
pub mod launch;
pub mod list;
pub mod menu;
pub mod show;
