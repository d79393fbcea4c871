use web_sys::{Document, HtmlElement};

use crate::core::EngineError;
use crate::domain::color::Color;
use crate::surface::ContextMenu;

use super::dom::{create_element, set_style};

const SWATCH_PX: u32 = 24;

/// Floating swatch row shown at the right-click position
pub(super) struct ColorPopup {
    root: HtmlElement,
    swatches: Vec<HtmlElement>,
}

impl ColorPopup {
    pub(super) fn build(document: &Document, palette: &[Color]) -> Result<Self, EngineError> {
        let root: HtmlElement = create_element(document, "div")?;
        root.set_attribute("data-pixelgrid-popup", "")
            .map_err(|_| EngineError::Dom("cannot tag color popup".to_string()))?;
        for (property, value) in [
            ("position", "fixed"),
            ("display", "none"),
            ("z-index", "1000"),
            ("padding", "8px"),
            ("background", "#ffffff"),
            ("border", "1px solid #d1d5db"),
            ("box-shadow", "0 10px 15px -3px rgba(0, 0, 0, 0.1)"),
        ] {
            set_style(&root, property, value)?;
        }

        let row: HtmlElement = create_element(document, "div")?;
        set_style(&row, "display", "flex")?;
        set_style(&row, "gap", "8px")?;
        root.append_child(&row)
            .map_err(|_| EngineError::Dom("cannot attach swatch row".to_string()))?;

        let size = format!("{SWATCH_PX}px");
        let mut swatches = Vec::with_capacity(palette.len());
        for (index, color) in palette.iter().enumerate() {
            let swatch: HtmlElement = create_element(document, "div")?;
            swatch
                .set_attribute("data-swatch", &index.to_string())
                .map_err(|_| EngineError::Dom("cannot tag swatch".to_string()))?;
            set_style(&swatch, "width", &size)?;
            set_style(&swatch, "height", &size)?;
            set_style(&swatch, "cursor", "pointer")?;
            set_style(&swatch, "background-color", &color.to_hex())?;
            swatch.set_title(&color.to_hex());
            row.append_child(&swatch)
                .map_err(|_| EngineError::Dom("cannot attach swatch".to_string()))?;
            swatches.push(swatch);
        }

        Ok(Self { root, swatches })
    }

    pub(super) fn root(&self) -> &HtmlElement {
        &self.root
    }

    pub(super) fn swatches(&self) -> &[HtmlElement] {
        &self.swatches
    }

    /// Show at the menu position, or hide when no menu is open
    pub(super) fn sync(&self, menu: Option<&ContextMenu>) -> Result<(), EngineError> {
        match menu {
            Some(menu) => {
                set_style(&self.root, "left", &format!("{}px", menu.position.x))?;
                set_style(&self.root, "top", &format!("{}px", menu.position.y))?;
                set_style(&self.root, "display", "block")
            }
            None => set_style(&self.root, "display", "none"),
        }
    }
}
