/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Writer options for the Jira writer.
 *
 * Each rendering policy that has more than one accepted Jira form is an
 * option with a single default. Options can be read from the JSON object
 * a host passes along with the document.
 */

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{WriterError, WriterResult};

/// Format tag that raw inlines and raw blocks must carry to be emitted verbatim.
pub const JIRA_FORMAT: &str = "jira";

macro_rules! policy_enum {
    (
        $(#[$meta:meta])*
        $name:ident, option = $option:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Key under which this policy appears in JSON writer options.
            pub const OPTION: &'static str = $option;

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = WriterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    _ => Err(WriterError::InvalidOptionValue {
                        option: $option.to_string(),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

policy_enum! {
    /// How literal text is escaped before it is embedded in markup.
    EscapePolicy, option = "escape" {
        /// Escape `{`, which would otherwise open a Jira macro.
        ///
        /// A `{` that already follows a backslash is taken as escaped and
        /// left alone, so escaping twice changes nothing. The cost is that
        /// literal `\{` in the source (`C:\{dir}`) goes out as is, and Jira
        /// drops the backslash when it displays it.
        #[default]
        Braces => "braces",
        /// Pass text through untouched.
        None => "none",
    }
}

policy_enum! {
    /// Form used for block quotes.
    BlockQuoteStyle, option = "block-quote" {
        /// `{quote}` panel around the (possibly multi-line) content.
        #[default]
        Panel => "panel",
        /// Single-line `bq. ` prefix on the trimmed content.
        SingleLine => "single-line",
    }
}

policy_enum! {
    /// Whether paragraphs carry surrounding newlines.
    ParagraphStyle, option = "paragraph" {
        #[default]
        Bare => "bare",
        Padded => "padded",
    }
}

policy_enum! {
    /// How inline math is written.
    MathStyle, option = "math" {
        /// Escaped TeX source as plain text.
        #[default]
        Plain => "plain",
        /// Escaped TeX source between `//(` and `//)`.
        Delimited => "delimited",
    }
}

/// Options controlling Jira output.
///
/// Expected JSON structure for [`WriterOptions::from_json`]:
/// ```json
/// {
///   "escape": "braces",
///   "block-quote": "panel",
///   "paragraph": "bare",
///   "math": "plain",
///   "code-language": true
/// }
/// ```
/// Every key is optional; unknown keys are ignored so hosts can pass their
/// full writer options object through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    pub escape: EscapePolicy,
    pub block_quote: BlockQuoteStyle,
    pub paragraph: ParagraphStyle,
    pub math: MathStyle,
    /// Emit `{code:<lang>}` when a code block's classes name a language.
    pub code_language: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            escape: EscapePolicy::default(),
            block_quote: BlockQuoteStyle::default(),
            paragraph: ParagraphStyle::default(),
            math: MathStyle::default(),
            code_language: true,
        }
    }
}

impl WriterOptions {
    pub const CODE_LANGUAGE_OPTION: &'static str = "code-language";

    pub fn with_escape(mut self, escape: EscapePolicy) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_block_quote(mut self, block_quote: BlockQuoteStyle) -> Self {
        self.block_quote = block_quote;
        self
    }

    pub fn with_paragraph(mut self, paragraph: ParagraphStyle) -> Self {
        self.paragraph = paragraph;
        self
    }

    pub fn with_math(mut self, math: MathStyle) -> Self {
        self.math = math;
        self
    }

    pub fn with_code_language(mut self, code_language: bool) -> Self {
        self.code_language = code_language;
        self
    }

    /// Read options from a JSON object, falling back to defaults for
    /// absent or `null` keys.
    pub fn from_json(opts: &Value) -> WriterResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            escape: get_policy(opts, EscapePolicy::OPTION, defaults.escape)?,
            block_quote: get_policy(opts, BlockQuoteStyle::OPTION, defaults.block_quote)?,
            paragraph: get_policy(opts, ParagraphStyle::OPTION, defaults.paragraph)?,
            math: get_policy(opts, MathStyle::OPTION, defaults.math)?,
            code_language: get_bool(opts, Self::CODE_LANGUAGE_OPTION, defaults.code_language)?,
        })
    }
}

// =============================================================================
// Helper functions for extracting fields from options
// =============================================================================

fn get_str<'a>(opts: &'a Value, key: &str) -> WriterResult<Option<&'a str>> {
    match opts.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(WriterError::InvalidOptionType {
            option: key.to_string(),
            expected: "string",
        }),
    }
}

fn get_bool(opts: &Value, key: &str, default: bool) -> WriterResult<bool> {
    match opts.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(WriterError::InvalidOptionType {
            option: key.to_string(),
            expected: "boolean",
        }),
    }
}

fn get_policy<T>(opts: &Value, key: &str, default: T) -> WriterResult<T>
where
    T: FromStr<Err = WriterError>,
{
    match get_str(opts, key)? {
        Some(s) => s.parse(),
        None => Ok(default),
    }
}
