/// Parser options.
///
/// Use [`Options::builder()`] to construct a customised instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {
    /// Whether a box accepts its own entry syntax as nested content.
    ///
    /// When disabled, a `<box ...>` found inside another box is reported as literal
    /// data instead of opening a nested box.
    pub nested_boxes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { nested_boxes: true }
    }
}

impl Options {
    /// Create a new `OptionsBuilder` for fluent configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use wikibox_parser::Options;
    ///
    /// let options = Options::builder().without_nested_boxes().build();
    /// assert!(!options.nested_boxes);
    /// ```
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Create a new `Options` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Builder for [`Options`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct OptionsBuilder {
    nested_boxes: bool,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self { nested_boxes: true }
    }
}

impl OptionsBuilder {
    /// Treat `<box ...>` inside a box as literal data.
    #[must_use]
    pub fn without_nested_boxes(mut self) -> Self {
        self.nested_boxes = false;
        self
    }

    /// Set whether boxes may be nested.
    #[must_use]
    pub fn with_nested_boxes(mut self, nested_boxes: bool) -> Self {
        self.nested_boxes = nested_boxes;
        self
    }

    #[must_use]
    pub fn build(self) -> Options {
        Options {
            nested_boxes: self.nested_boxes,
        }
    }
}
