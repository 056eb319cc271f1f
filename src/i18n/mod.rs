//! Translation trees and the operations over them.
//!
//! # Architecture
//!
//! - `node`: the `TranslationNode` tree (leaf / sequence / mapping)
//! - `interpolation`: placeholder rewriting between `{x}` and `{{x}}`
//! - `transform`: placeholder rewriting applied to a whole tree
//! - `flatten`: nested tree to dotted-key map
//! - `path`: dotted-key lookup into a tree
//! - `locale` / `registry`: supported locales and their display names
//! - `loader` / `catalog`: reading dictionaries and holding them per locale
//! - `validator`: cross-locale key and placeholder consistency
//!
//! The core operations are pure functions over borrowed trees and return
//! fresh values, so they can be called from any thread without coordination.
//!
//! # Example
//!
//! ```rust
//! use locale_tree::i18n::{
//!     flatten, get_by_path, transform_translations, InterpolationFormat, TranslationNode,
//! };
//!
//! let tree = TranslationNode::mapping([(
//!     "Tasks",
//!     TranslationNode::mapping([("summary", TranslationNode::leaf("{name} has {count} tasks"))]),
//! )]);
//!
//! let converted = transform_translations(&tree, InterpolationFormat::I18next);
//! assert_eq!(
//!     get_by_path(&converted, "Tasks.summary"),
//!     Some("{{name}} has {{count}} tasks")
//! );
//! assert_eq!(flatten(&tree).len(), 1);
//! ```

mod catalog;
mod flatten;
mod interpolation;
mod loader;
mod locale;
mod node;
mod path;
mod registry;
mod transform;
mod validator;

pub use catalog::{Catalog, CatalogError};
pub use flatten::{flatten, flatten_keys, DEFAULT_SEPARATOR};
pub use interpolation::{convert_interpolation, placeholder_names, InterpolationFormat, UnknownFormat};
pub use loader::{load_dictionary, load_locale_dir, node_from_value, parse_dictionary, LoadError};
pub use locale::{Locale, UnknownLocale, SUPPORTED_LOCALES};
pub use node::{FlatKeyMap, TranslationNode};
pub use path::{get_by_path, get_by_path_with};
pub use registry::{LocaleConfig, LocaleRegistry, RegistryError};
pub use transform::transform_translations;
pub use validator::{CatalogValidator, ValidationReport};
