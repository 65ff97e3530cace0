//! CSS custom property output
//!
//! Hosts that style through a cascade declare the dark set on `:root` and
//! the light set under `[data-theme='light']`, then flip the attribute.

use std::collections::HashMap;
use std::fmt::Write;

use crate::{ThemeMode, ThemeToken, ThemeTokens};

impl ThemeTokens {
    /// Variable name (without `--`) to CSS value, for every token.
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        ThemeToken::ALL
            .iter()
            .map(|&token| (token.css_name().to_string(), self.get(token).to_css()))
            .collect()
    }

    /// `--name: value;` lines in catalog order, indented for a rule body.
    pub fn css_declarations(&self) -> String {
        let mut out = String::new();
        for token in ThemeToken::ALL {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "  --{}: {};", token.css_name(), self.get(token).to_css());
        }
        out
    }

    /// Both modes as one stylesheet: dark on `:root`, light on its attribute.
    pub fn stylesheet() -> String {
        format!(
            ":root {{\n{}}}\n\n[data-theme='{}'] {{\n{}}}\n",
            ThemeTokens::for_mode(ThemeMode::Dark).css_declarations(),
            ThemeMode::Light.data_attr(),
            ThemeTokens::for_mode(ThemeMode::Light).css_declarations(),
        )
    }
}
