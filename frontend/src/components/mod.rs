pub mod lessons;
pub mod login_form;
pub mod term_page;
pub mod toast;
