pub mod leave_form;
pub mod list;
