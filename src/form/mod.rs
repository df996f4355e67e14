pub mod catalog;
pub mod field;
pub mod gas;
pub mod state;

pub use catalog::{Catalog, FieldDescriptor, FieldRole};
pub use field::{Field, FieldEditor, LineEditor};
pub use state::{update, Command, FormState, SessionEnd, Transition};
