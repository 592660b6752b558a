pub mod admin_users;
pub mod confirm_delete;
pub mod dashboard;
pub mod header;
pub mod modal;
pub mod settings;
pub mod sidebar;
pub mod user_form;
