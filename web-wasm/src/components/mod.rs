pub mod header;
pub mod search_form;
pub mod results_page;
pub mod store_list;
