pub mod form_field;
pub mod section_header;
pub mod toast;
