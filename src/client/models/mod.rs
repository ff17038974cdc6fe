pub mod form_state;
pub mod messages;
