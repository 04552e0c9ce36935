use serde::{Deserialize, Serialize};

const INDENT: &str = "  ";

/// How fragment selections are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentMode {
    /// Expand every fragment in place.
    Inline,
    /// Reference registered fragments by their assigned document name.
    #[default]
    Named,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatterOptions {
    pub prettify: bool,
    pub fragments: FragmentMode,
}

/// Presentation policy for rendered documents. All whitespace, separators,
/// and indentation come from here so the same traversal serves both
/// prettified and minified output.
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    options: FormatterOptions,
}

impl Formatter {
    pub fn new(options: FormatterOptions) -> Self {
        Formatter { options }
    }

    pub fn pretty() -> Self {
        Formatter::new(FormatterOptions {
            prettify: true,
            fragments: FragmentMode::default(),
        })
    }

    pub fn minified() -> Self {
        Formatter::new(FormatterOptions {
            prettify: false,
            fragments: FragmentMode::default(),
        })
    }

    pub fn with_fragment_mode(mut self, fragments: FragmentMode) -> Self {
        self.options.fragments = fragments;
        self
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    pub fn prettify(&self) -> bool {
        self.options.prettify
    }

    pub fn fragment_mode(&self) -> FragmentMode {
        self.options.fragments
    }

    /// Single whitespace token; empty when minified.
    pub fn space(&self) -> &'static str {
        if self.options.prettify {
            " "
        } else {
            ""
        }
    }

    /// Empty when minified.
    pub fn newline(&self) -> &'static str {
        if self.options.prettify {
            "\n"
        } else {
            ""
        }
    }

    /// Placed between sibling selections.
    pub fn line_separator(&self) -> &'static str {
        if self.options.prettify {
            "\n"
        } else {
            ","
        }
    }

    /// Placed between serialized arguments and object/list entries.
    pub fn separator(&self) -> &'static str {
        if self.options.prettify {
            ", "
        } else {
            ","
        }
    }

    /// Applies one indentation level to every line of `text`. Pass-through
    /// when minified.
    pub fn indent(&self, text: &str) -> String {
        if !self.options.prettify {
            return text.to_string();
        }

        text.lines()
            .map(|line| format!("{INDENT}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
