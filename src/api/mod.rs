pub mod input;

pub use input::{parse_json_body, validate_blog_input, BlogInput};
