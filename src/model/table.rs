//! Row data structure

/// A data row, positionally aligned with the header row of its file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Decoded field values in column order
    fields: Vec<String>,
}

impl Row {
    /// Create a new row
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Get a cell by column index; cells past the end of a short row read as empty
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    /// Check whether the cell at `index` is empty
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index).is_empty()
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Render the row by joining its fields with the delimiter
    pub fn join(&self, delimiter: char) -> String {
        let mut sep = [0u8; 4];
        self.fields.join(delimiter.encode_utf8(&mut sep))
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
