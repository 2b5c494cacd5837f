pub mod components;
pub mod date_utils;
pub mod icons;
pub mod load;
pub mod number_format;
pub mod page_frame;
