//! Renders the generated Go source file.
//!
//! The content map arrives already escaped; this module only lays it out.
//! Output shape:
//!
//! ```text
//! // Code generated by file2string. DO NOT EDIT.
//!
//! package assets
//!
//! var files = map[string]string{
//!
//! 	"a.txt": `has a ` + "`" + ` inside`,
//! }
//! ```

use crate::models::GenerationRequest;
use crate::services::escape::DELIMITER;
use std::fmt;

/// First line of every generated file; Go tooling treats the file as generated.
pub const GENERATED_HEADER: &str = "// Code generated by file2string. DO NOT EDIT.";

/// Go rejects a byte order mark anywhere but the start of a source file.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Splices a byte order mark into a raw literal as an interpreted string.
pub const BYTE_ORDER_MARK_SPLICE: &str = "` + \"\\ufeff\" + `";

/// Display adapter over a request, writing the full Go source.
pub struct GoSource<'a>(pub &'a GenerationRequest);

impl fmt::Display for GoSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = &self.0.settings;

        writeln!(f, "{GENERATED_HEADER}")?;
        writeln!(f)?;
        writeln!(f, "package {}", settings.package_name)?;
        writeln!(f)?;
        writeln!(f, "var {} = map[string]string{{", settings.variable_name)?;
        writeln!(f)?;
        for (path, escaped) in self.0.contents.iter() {
            let literal = escaped.replace(BYTE_ORDER_MARK, BYTE_ORDER_MARK_SPLICE);
            writeln!(
                f,
                "\t{}: {DELIMITER}{literal}{DELIMITER},",
                quote_go_string(path)
            )?;
        }
        writeln!(f, "}}")
    }
}

/// Render the complete generated file.
pub fn generate(request: &GenerationRequest) -> String {
    GoSource(request).to_string()
}

/// Quote `s` as a Go interpreted string literal.
pub fn quote_go_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\x7f' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
