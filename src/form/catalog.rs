//! Static description of the form: which fields exist, in what order, and
//! where the page boundaries fall.

use std::fmt;
use std::ops::Range;

use crate::errors::CatalogError;

pub const DEFAULT_WIDTH: usize = 40;

/// Semantic tag attached to a field so the gas calculation can find its
/// inputs without depending on field positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Text,
    GasStart,
    GasEnd,
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldRole::Text => "text",
            FieldRole::GasStart => "start gas",
            FieldRole::GasEnd => "end gas",
        };
        f.write_str(label)
    }
}

/// Declarative description of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub placeholder: &'static str,
    pub width: usize,
    pub role: FieldRole,
}

impl FieldDescriptor {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            width: DEFAULT_WIDTH,
            role: FieldRole::Text,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_role(mut self, role: FieldRole) -> Self {
        self.role = role;
        self
    }
}

/// Ordered field descriptors plus the page partition over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    fields: Vec<FieldDescriptor>,
    pages: Vec<Range<usize>>,
}

impl Catalog {
    /// Builds a catalog whose pages take `page_sizes` consecutive fields each.
    pub fn new(fields: Vec<FieldDescriptor>, page_sizes: &[usize]) -> Result<Self, CatalogError> {
        if fields.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut pages = Vec::with_capacity(page_sizes.len());
        let mut start = 0;
        for (index, size) in page_sizes.iter().copied().enumerate() {
            if size == 0 {
                return Err(CatalogError::EmptyPage(index));
            }
            pages.push(start..start + size);
            start += size;
        }
        if start != fields.len() {
            return Err(CatalogError::PartitionMismatch {
                covered: start,
                fields: fields.len(),
            });
        }

        for role in [FieldRole::GasStart, FieldRole::GasEnd] {
            match fields.iter().filter(|field| field.role == role).count() {
                0 => return Err(CatalogError::MissingRole(role)),
                1 => {}
                _ => return Err(CatalogError::DuplicateRole(role)),
            }
        }

        Ok(Self { fields, pages })
    }

    /// The dive log: three pages of 3, 5 and 5 fields, gas readings last.
    pub fn dive_log() -> Self {
        let fields = vec![
            FieldDescriptor::new("Name your dive"),
            FieldDescriptor::new("Where did you dive?"),
            FieldDescriptor::new("When did you dive?"),
            FieldDescriptor::new("Enter your dive type e.g. boat"),
            FieldDescriptor::new("What type of water were you diving in?"),
            FieldDescriptor::new("Enter your bottom time"),
            FieldDescriptor::new("Enter your max depth"),
            FieldDescriptor::new("Enter the surface temp"),
            FieldDescriptor::new("Enter the bottom temp"),
            FieldDescriptor::new("Enter your weight"),
            FieldDescriptor::new("Enter your suit type e.g. wetsuit"),
            FieldDescriptor::new("Enter your start gas").with_role(FieldRole::GasStart),
            FieldDescriptor::new("Enter your end gas").with_role(FieldRole::GasEnd),
        ];
        Self {
            fields,
            pages: vec![0..3, 3..8, 8..13],
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Global field indices on `page`. Panics when `page` is out of range.
    pub fn page(&self, page: usize) -> Range<usize> {
        self.pages[page].clone()
    }

    pub fn page_len(&self, page: usize) -> usize {
        self.pages[page].len()
    }

    /// Global index of the field with `role`. Text fields are not unique, so
    /// this only answers for the gas roles.
    pub fn position(&self, role: FieldRole) -> Option<usize> {
        if role == FieldRole::Text {
            return None;
        }
        self.fields.iter().position(|field| field.role == role)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::dive_log()
    }
}
