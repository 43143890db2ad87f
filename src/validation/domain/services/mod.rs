pub mod form_request;
