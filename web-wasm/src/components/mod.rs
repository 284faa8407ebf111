pub mod header;
pub mod image_error;
pub mod preview_image;
pub mod toast_host;
pub mod upload_form;
