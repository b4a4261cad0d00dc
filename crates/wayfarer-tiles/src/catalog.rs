//! Structure-template catalog used by urban chunk generation.
//!
//! A template is a rectangular block of glyphs. Cells holding the catalog's
//! blank glyph are transparent: they occupy footprint but stamp nothing.
//! Rows shorter than the widest row are treated as padded with blanks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chunk::{CHUNK_HEIGHT, CHUNK_WIDTH};

/// A named multi-cell glyph block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureTemplate {
    /// Template name (e.g. "shop").
    pub name: String,
    /// Glyph rows, top to bottom.
    pub rows: Vec<String>,
}

impl StructureTemplate {
    /// Creates a template from string rows.
    pub fn new(name: &str, rows: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Footprint width: the length of the widest row, in glyphs.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Footprint height in rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the glyph at `(x, y)` within the template, or `None` where the
    /// cell is blank or past the end of a short row.
    pub fn glyph_at(&self, x: usize, y: usize, blank: char) -> Option<char> {
        self.rows
            .get(y)
            .and_then(|row| row.chars().nth(x))
            .filter(|&c| c != blank)
    }
}

/// Errors found while validating a structure catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no templates.
    #[error("structure catalog is empty")]
    Empty,
    /// A template has no rows or only zero-length rows.
    #[error("structure template '{0}' has no cells")]
    EmptyTemplate(String),
    /// A template cannot fit inside the walled chunk interior.
    #[error("structure template '{name}' ({width}x{height}) does not fit a chunk interior")]
    TooLarge {
        /// Template name.
        name: String,
        /// Template width.
        width: usize,
        /// Template height.
        height: usize,
    },
}

/// Ordered list of structure templates with a shared blank glyph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureCatalog {
    /// Templates in selection order.
    pub templates: Vec<StructureTemplate>,
    /// Glyph meaning "no stamp here".
    pub blank: char,
}

impl Default for StructureCatalog {
    fn default() -> Self {
        Self {
            templates: vec![
                StructureTemplate::new("small_house", &[r" /\ ", r"/__\"]),
                StructureTemplate::new("shop", &["+----+", "|SHOP|", "+----+"]),
                StructureTemplate::new("pine_tree", &[r" /\ ", r"//\\"]),
                StructureTemplate::new("rocks_cluster", &[" o", "o o"]),
            ],
            blank: ' ',
        }
    }
}

impl StructureCatalog {
    /// Checks every template against the chunk interior.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for a catalog with no templates,
    /// [`CatalogError::EmptyTemplate`] for a template without cells, and
    /// [`CatalogError::TooLarge`] when a template is wider or taller than the
    /// area inside the border walls.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.templates.is_empty() {
            return Err(CatalogError::Empty);
        }
        for t in &self.templates {
            let (width, height) = (t.width(), t.height());
            if width == 0 || height == 0 {
                return Err(CatalogError::EmptyTemplate(t.name.clone()));
            }
            if width > CHUNK_WIDTH - 2 || height > CHUNK_HEIGHT - 2 {
                return Err(CatalogError::TooLarge {
                    name: t.name.clone(),
                    width,
                    height,
                });
            }
        }
        Ok(())
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Widest template footprint.
    pub fn max_width(&self) -> usize {
        self.templates.iter().map(|t| t.width()).max().unwrap_or(0)
    }

    /// Tallest template footprint.
    pub fn max_height(&self) -> usize {
        self.templates.iter().map(|t| t.height()).max().unwrap_or(0)
    }

    /// Looks up a template by name.
    pub fn get(&self, name: &str) -> Option<&StructureTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = StructureCatalog::default();
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.max_width(), 6);
        assert_eq!(catalog.max_height(), 3);
    }

    #[test]
    fn test_short_rows_pad_with_blank() {
        let catalog = StructureCatalog::default();
        let rocks = catalog.get("rocks_cluster").expect("default template");
        assert_eq!(rocks.width(), 3);
        assert_eq!(rocks.glyph_at(0, 0, catalog.blank), None);
        assert_eq!(rocks.glyph_at(1, 0, catalog.blank), Some('o'));
        assert_eq!(rocks.glyph_at(2, 0, catalog.blank), None);
        assert_eq!(rocks.glyph_at(2, 1, catalog.blank), Some('o'));
    }

    #[test]
    fn test_shop_glyphs() {
        let catalog = StructureCatalog::default();
        let shop = catalog.get("shop").expect("default template");
        assert_eq!(shop.glyph_at(1, 1, ' '), Some('S'));
        assert_eq!(shop.glyph_at(0, 0, ' '), Some('+'));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let catalog = StructureCatalog {
            templates: Vec::new(),
            blank: ' ',
        };
        assert_eq!(catalog.validate(), Err(CatalogError::Empty));
    }

    #[test]
    fn test_empty_template_rejected() {
        let catalog = StructureCatalog {
            templates: vec![StructureTemplate::new("nothing", &[""])],
            blank: ' ',
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyTemplate("nothing".into()))
        );
    }

    #[test]
    fn test_oversized_template_rejected() {
        let wide = "x".repeat(CHUNK_WIDTH - 1);
        let catalog = StructureCatalog {
            templates: vec![StructureTemplate::new("wall_of_x", &[wide.as_str()])],
            blank: ' ',
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::TooLarge { width, .. }) if width == CHUNK_WIDTH - 1
        ));
    }

    #[test]
    fn test_template_dimensions() {
        let t = StructureTemplate::new("hut", &["^^", "||"]);
        assert_eq!((t.width(), t.height()), (2, 2));
    }
}
