//! Usage-block rendering for declared options.

use crate::opt::Opt;

/// Render one line per option in registration order.
///
/// The primary name is shown with a double dash and aliases with a single
/// dash, joined by `|`. Value-taking options get a `<value>` placeholder,
/// mandatory options a `MANDATORY` marker, and defaulted options their
/// stored value.
pub(crate) fn render(opts: &[Opt]) -> String {
    let mut out = String::from("Usage :\n");
    for opt in opts {
        out.push_str("  --");
        out.push_str(opt.name());
        for alias in &opt.names()[1..] {
            out.push_str(" | -");
            out.push_str(alias);
        }
        if opt.expects_value() {
            out.push_str(" <value>");
        }
        if opt.is_mandatory() {
            out.push_str(" MANDATORY");
        }
        if opt.has_default() {
            if let Ok(value) = opt.value() {
                out.push_str(" (default: ");
                out.push_str(value);
                out.push(')');
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::Parser;

    #[test]
    fn lists_names_value_and_mandatory() {
        let mut parser = Parser::new();
        parser
            .declare("output")
            .unwrap()
            .alias("o")
            .unwrap()
            .has_value()
            .mandatory();
        parser.declare("verbose").unwrap().alias("v").unwrap();

        let text = parser.render_help();
        assert!(
            text.contains("--output | -o <value> MANDATORY"),
            "unexpected help:\n{text}"
        );
        assert!(text.contains("--verbose | -v"), "unexpected help:\n{text}");
    }

    #[test]
    fn shows_default_values() {
        let mut parser = Parser::new();
        parser.declare("format").unwrap().default_value("plain");

        let text = parser.render_help();
        assert!(
            text.contains("--format <value> (default: plain)"),
            "unexpected help:\n{text}"
        );
    }

    #[test]
    fn one_line_per_option_in_registration_order() {
        let mut parser = Parser::new();
        parser.declare("bbb").unwrap();
        parser.declare("aaa").unwrap();

        let text = parser.render_help();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Usage :");
        assert!(lines[1].contains("--bbb"));
        assert!(lines[2].contains("--aaa"));
    }

    #[test]
    fn print_help_writes_the_rendered_block() {
        let mut parser = Parser::new();
        parser.declare("option").unwrap();

        let mut buf = Vec::new();
        parser.print_help(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), parser.render_help());
    }
}
