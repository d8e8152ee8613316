use crate::error::HarvestError;

/// Active choice within a fixed, ordered set of option ids.
///
/// Used for the marketplace category, the logistics route and the weather
/// farm. The active id is always a member of the option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSelector {
    kind: &'static str,
    options: Vec<String>,
    selected: usize,
}

impl OptionSelector {
    /// Create a selector over `options`, starting on the first one
    pub fn new<I, S>(kind: &'static str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        Self {
            kind,
            options,
            selected: 0,
        }
    }

    /// Make `id` the active option
    pub fn select(&mut self, id: &str) -> Result<(), HarvestError> {
        match self.options.iter().position(|option| option == id) {
            Some(index) => {
                self.selected = index;
                Ok(())
            }
            None => Err(HarvestError::UnknownOption {
                kind: self.kind.to_string(),
                id: id.to_string(),
            }),
        }
    }

    /// Make the option at `index` active
    pub fn select_index(&mut self, index: usize) -> Result<(), HarvestError> {
        match self.options.get(index) {
            Some(_) => {
                self.selected = index;
                Ok(())
            }
            None => Err(HarvestError::UnknownOption {
                kind: self.kind.to_string(),
                id: index.to_string(),
            }),
        }
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = if self.selected == 0 {
                self.options.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Active option id
    pub fn selected(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
