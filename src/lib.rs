//! String manipulation utilities: case conversion between CamelCase,
//! kebab-case and snake_case, character class scanning, random string
//! generation, validation and a handful of text helpers.
//!
//! Every function is a pure transform of its input and never fails on
//! unexpected characters; they are dropped or passed through instead.
//!
//! ```
//! use stringkit::inflector::{camel_to_kebab, kebab_to_camel};
//! use stringkit::text::between;
//!
//! assert_eq!(camel_to_kebab("AbcDEFghi"), "abc-de-fghi");
//! assert_eq!(kebab_to_camel("this-that"), "ThisThat");
//! assert_eq!(between("Hello [world]!", "[", "]"), "world");
//! ```

pub mod classify;
pub mod inflector;
pub mod numbers;
pub mod random;
pub mod text;
pub mod validate;

pub use inflector::{
    camel_to_kebab, camel_to_snake, is_snake_case, kebab_to_camel, snake_to_camel,
};
pub use text::{between, has_char_type, CharTypes};
