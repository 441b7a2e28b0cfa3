use watermagick::command::{CommandString, Invocation};

/// Splits every stage of `command` into words the way `sh` would.
pub fn shell_words(command: &CommandString) -> Vec<Vec<String>> {
    let stages: Vec<&Invocation> = match command {
        CommandString::Single(invocation) => vec![invocation],
        CommandString::Piped(pipeline) => vec![pipeline.producer(), pipeline.consumer()],
    };
    stages
        .into_iter()
        .map(|stage| {
            shlex::split(&stage.to_string())
                .unwrap_or_else(|| panic!("unbalanced quoting in `{stage}`"))
        })
        .collect()
}

/// How a path is expected to appear as a command operand.
pub fn operand(path: &str) -> String {
    if path.starts_with('-') {
        format!("./{path}")
    } else {
        path.to_string()
    }
}

/// Decodes the single-quoted strings inside a `-draw` argument.
pub fn draw_strings(draw: &str) -> Vec<String> {
    let mut strings = Vec::new();
    let mut chars = draw.chars();
    while let Some(c) = chars.next() {
        if c != '\'' {
            continue;
        }
        let mut string = String::new();
        while let Some(c) = chars.next() {
            match c {
                '\\' => string.extend(chars.next()),
                '\'' => break,
                other => string.push(other),
            }
        }
        strings.push(string);
    }
    strings
}
