/// The greeter — renders a story template around a caller-supplied name.

use crate::core::template::StoryTemplate;

/// Name used when the caller supplies none.
pub const DEFAULT_NAME: &str = "World";

/// Renders a story template for any name.
///
/// `Greeter::default()` carries the built-in Sunvale story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    template: StoryTemplate,
}

impl Default for Greeter {
    fn default() -> Self {
        Greeter::new(StoryTemplate::sunvale())
    }
}

impl Greeter {
    pub fn new(template: StoryTemplate) -> Self {
        Greeter { template }
    }

    pub fn template(&self) -> &StoryTemplate {
        &self.template
    }

    /// Length of the story with an empty name.
    pub fn template_len(&self) -> usize {
        self.template.literal_len()
    }

    /// Render the story, falling back to `DEFAULT_NAME` when `name` is `None`.
    pub fn greet<'a>(&self, name: impl Into<Option<&'a str>>) -> String {
        self.template.render(name.into().unwrap_or(DEFAULT_NAME))
    }
}

/// Return the Sunvale story with `name` (default `"World"`) in the greeting.
///
/// ```
/// use sunvale_greeter::greet;
///
/// assert!(greet("Ada").contains("Hello, Ada!"));
/// assert_eq!(greet(None), greet("World"));
/// ```
pub fn greet<'a>(name: impl Into<Option<&'a str>>) -> String {
    Greeter::default().greet(name)
}
