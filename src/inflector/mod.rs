//! String based case inflections. Camel, kebab, snake and title cases are
//! supported as both traits and pure functions acting on `str`.
//!
//! ```
//! use stringkit::inflector::Inflector;
//!
//! assert_eq!("ManagerID".to_kebab_case(), "manager-id");
//! assert_eq!("manager_id".to_camel_case(), "ManagerId");
//! ```

/// Provides case inflections
/// - Camel case
/// - Kebab case
/// - Snake case
/// - Title case
pub mod case;

pub use case::Case;

pub use case::camel::is_camel_case;
pub use case::camel::kebab_to_camel;
pub use case::camel::snake_to_camel;
pub use case::camel::to_camel_case;

pub use case::snake::camel_to_snake;
pub use case::snake::is_snake_case;
pub use case::snake::to_snake_case;

pub use case::kebab::camel_to_kebab;
pub use case::kebab::is_kebab_case;
pub use case::kebab::snake_to_kebab;
pub use case::kebab::to_kebab_case;

pub use case::title::decap;
pub use case::title::is_title_case;
pub use case::title::to_title_case;

#[allow(missing_docs)]
pub trait Inflector {
    fn to_camel_case(&self) -> String;
    fn is_camel_case(&self) -> bool;

    fn to_snake_case(&self) -> String;
    fn is_snake_case(&self) -> bool;

    fn to_kebab_case(&self) -> String;
    fn is_kebab_case(&self) -> bool;

    fn to_title_case(&self) -> String;
    fn is_title_case(&self) -> bool;

    fn decap(&self) -> String;

    fn to_plural(&self) -> String;
}

impl Inflector for str {
    fn to_camel_case(&self) -> String {
        to_camel_case(self)
    }

    fn is_camel_case(&self) -> bool {
        is_camel_case(self)
    }

    fn to_snake_case(&self) -> String {
        to_snake_case(self)
    }

    fn is_snake_case(&self) -> bool {
        is_snake_case(self)
    }

    fn to_kebab_case(&self) -> String {
        to_kebab_case(self)
    }

    fn is_kebab_case(&self) -> bool {
        is_kebab_case(self)
    }

    fn to_title_case(&self) -> String {
        to_title_case(self)
    }

    fn is_title_case(&self) -> bool {
        is_title_case(self)
    }

    fn decap(&self) -> String {
        decap(self)
    }

    fn to_plural(&self) -> String {
        crate::text::plural(self)
    }
}
