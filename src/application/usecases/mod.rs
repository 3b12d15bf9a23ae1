pub mod list_templates;
pub mod send_campaign;
