use super::{color::*, error::*};

/// Static, string-typed row of the placeholder table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySource {
    pub filename: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub label: &'static str,
}

pub const DISHES: [EntrySource; 7] = [
    EntrySource { filename: "Placeholder M.png", start: "#D4A574", end: "#8B6F47", label: "Molokhia" },
    EntrySource { filename: "Placeholder D.png", start: "#8B4513", end: "#D2691E", label: "Duck" },
    EntrySource { filename: "Placeholder W.png", start: "#DAA520", end: "#B8860B", label: "Grape Leaves" },
    EntrySource { filename: "Placeholder S.png", start: "#FF8C00", end: "#FF6347", label: "Tawook" },
    EntrySource { filename: "Placeholder F.png", start: "#CD5C5C", end: "#8B3A3A", label: "Fattah" },
    EntrySource { filename: "Placeholder K.png", start: "#A0522D", end: "#654321", label: "Moussaka" },
    EntrySource { filename: "Placeholder H.png", start: "#6B4423", end: "#3E2723", label: "Pigeon" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderEntry {
    pub filename: String,
    pub start: Color,
    pub end: Color,
    /// Informational only, never drawn.
    pub label: String,
}

impl PlaceholderEntry {
    pub fn new(
        filename: impl Into<String>,
        start: Color, end: Color,
        label: impl Into<String>
    ) -> Self {
        PlaceholderEntry {
            filename: filename.into(),
            start, end,
            label: label.into()
        }
    }
}

impl TryFrom<&EntrySource> for PlaceholderEntry {
    type Error = ColorError;

    fn try_from(src: &EntrySource) -> Result<Self, Self::Error> {
        Ok(PlaceholderEntry::new(
            src.filename,
            Color::from_hex(src.start)?,
            Color::from_hex(src.end)?,
            src.label
        ))
    }
}

pub fn dish_placeholders() -> Result<Vec<PlaceholderEntry>, ColorError> {
    DISHES.iter().map(PlaceholderEntry::try_from).collect()
}
