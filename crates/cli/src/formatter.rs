//! # Output formatting
//!
//! Turns catalog build results into the text or JSON printed on stdout.
use serde::Serialize;
use type_token::{TypeToken, TypeTokenError};

use crate::catalog::Entry;
use crate::cli::RenderArgs;

/// One built catalog entry, ready for rendering.
#[derive(Serialize)]
pub struct Rendered {
    pub name: &'static str,
    pub summary: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Token(TypeToken),
    Error(TypeTokenError),
}

impl Rendered {
    pub fn build(entry: &Entry) -> Self {
        let outcome = match entry.build() {
            Ok(token) => Outcome::Token(token),
            Err(error) => Outcome::Error(error),
        };
        Self {
            name: entry.name,
            summary: entry.summary,
            outcome,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }

    /// Single-line text form: `name: rendering` or `name: error: message`.
    pub fn to_text(&self, args: RenderArgs) -> String {
        match &self.outcome {
            Outcome::Token(token) if args.full_paths => format!("{}: {token:#}", self.name),
            Outcome::Token(token) => format!("{}: {token}", self.name),
            Outcome::Error(error) => format!("{}: error: {error}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn rendered(name: &str) -> Rendered {
        Rendered::build(catalog::find(name).unwrap())
    }

    #[test]
    fn text_output() {
        let args = RenderArgs::default();
        assert_eq!(
            rendered("map-of-string-to-integer").to_text(args),
            "map-of-string-to-integer: HashMap<String, i32>"
        );
        assert_eq!(
            rendered("unpinned").to_text(args),
            "unpinned: error: TypeToken isn't parameterized"
        );

        let full = RenderArgs {
            full_paths: true,
            ..args
        };
        assert_eq!(
            rendered("list-of-integers").to_text(full),
            "list-of-integers: alloc::vec::Vec<i32>"
        );
    }

    #[test]
    fn json_output_flattens_the_outcome() {
        let ok = serde_json::to_value(rendered("string")).unwrap();
        assert_eq!(ok["name"], "string");
        assert_eq!(ok["token"]["raw_type"]["name"], "String");

        let failed = rendered("map-missing-value");
        assert!(failed.is_error());
        let failed = serde_json::to_value(failed).unwrap();
        assert_eq!(
            failed["error"]["InvalidTypeArgument"]["position"],
            "$[1]"
        );
    }
}
