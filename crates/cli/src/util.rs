use nu_ansi_term::Style;

/// Bold styling for operator-facing summary lines.
pub fn bold(msg: impl AsRef<str>) -> String {
    Style::new()
        .bold()
        .paint(msg.as_ref().to_owned())
        .to_string()
}
