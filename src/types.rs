use std::fmt::Display;

/// Column width of the field labels in the report
pub(crate) const LABEL_WIDTH: usize = 20;

/// Marker printed for optional fields that were not set in the model file
pub const PLACEHOLDER: &str = "N/A";

/// Render a sparse field, keeping "not set" distinct from a zero value
pub fn or_placeholder<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Byte layout of the `.data` weight dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataLayout {
    /// Each element is its 4 little-endian f32 bytes followed by the same
    /// 8-decimal text line written to the `.txt` dump. This is what earlier
    /// releases of the tool produced and is kept as the default.
    #[default]
    Interleaved,
    /// Contiguous little-endian f32 values, 4 bytes per element
    Raw,
}

impl DataLayout {
    /// Number of bytes one element occupies in the dump
    pub fn element_len(&self, value: f32) -> usize {
        match self {
            DataLayout::Interleaved => 4 + format_value(value).len() + 1,
            DataLayout::Raw => 4,
        }
    }

    /// Check if the dump mixes text into the binary stream
    pub fn is_interleaved(&self) -> bool {
        matches!(self, DataLayout::Interleaved)
    }
}

/// Fixed-point rendering used for every exported weight value
#[inline]
pub fn format_value(value: f32) -> String {
    format!("{:.8}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_only_for_absent_values() {
        assert_eq!(or_placeholder(Some(0)), "0");
        assert_eq!(or_placeholder::<i32>(None), "N/A");
        assert_eq!(or_placeholder(Some("")), "");
    }

    #[test]
    fn values_have_eight_decimals() {
        assert_eq!(format_value(1.5), "1.50000000");
        assert_eq!(format_value(-2.25), "-2.25000000");
        assert_eq!(format_value(0.0), "0.00000000");
    }

    #[test]
    fn element_len_counts_text_and_newline() {
        assert_eq!(DataLayout::Raw.element_len(-2.25), 4);
        assert_eq!(DataLayout::Interleaved.element_len(-2.25), 4 + 11 + 1);
    }
}
