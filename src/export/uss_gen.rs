//! USS text generation from style records.
//!
//! Rules are written in the order given, one block per record, separated by
//! a blank line:
//!
//! ```
//! use typeuss::Selector;
//! use typeuss::export::generate_uss;
//!
//! let styles = [
//!     Selector::class("a").style(|s| { s.width(10); }),
//!     Selector::class("b").style(|s| { s.height(20); }),
//! ];
//! assert_eq!(
//!     generate_uss(&styles),
//!     ".a {\n    width: 10px;\n}\n\n.b {\n    height: 20px;\n}\n"
//! );
//! ```

use crate::style::{Style, ToUss};

/// Render the records for one stylesheet.
///
/// Output order equals input order and nothing is merged, deduplicated or
/// minified, so identical input always produces identical text. The text
/// ends with a single newline; an empty slice renders as an empty string.
pub fn generate_uss(styles: &[Style]) -> String {
    let mut stylesheet = String::new();
    write_uss(styles, &mut stylesheet);
    stylesheet
}

/// Append the rendered records to `buf`.
pub fn write_uss(styles: &[Style], buf: &mut String) {
    for (i, style) in styles.iter().enumerate() {
        if i > 0 {
            buf.push_str("\n\n");
        }
        style.to_uss(buf);
    }
    if !styles.is_empty() {
        buf.push('\n');
    }
}
