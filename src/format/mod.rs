//! 展示用格式化函数
pub mod currency;
pub mod sort_code;

pub use currency::currency_converter;
pub use sort_code::formatted_sort_code;
