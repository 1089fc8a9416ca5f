//! Unicode display width helpers.

mod width;

pub use width::{
    WidthMethod, display_width, display_width_char, display_width_char_with_method,
    display_width_with_method, set_width_method, width_method,
};
