//! Input and result types shared by the coordinate parsers.

use nom::error::{VerboseError, VerboseErrorKind};

pub type Input<'a> = &'a str;
pub type Result<'a, O> = nom::IResult<Input<'a>, O, VerboseError<Input<'a>>>;

/// Collapse the `context(...)` labels attached to a parse error into a single trail, outermost
/// label first, e.g. `"Latitude => Minutes"`.
pub fn context_trail(e: &VerboseError<Input<'_>>) -> String {
    let trail: Vec<&str> = e
        .errors
        .iter()
        .filter_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(ctx) => Some(*ctx),
            _ => None,
        })
        .rev()
        .collect();

    if trail.is_empty() {
        "unexpected input".to_string()
    } else {
        trail.join(" => ")
    }
}

/// Same as [`context_trail`], but for the `nom::Err` wrapper returned by a parser.
pub fn error_trail(e: &nom::Err<VerboseError<Input<'_>>>) -> String {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => context_trail(e),
        nom::Err::Incomplete(_) => "incomplete input".to_string(),
    }
}

/// Render a parse error against the input it was raised for, pointing at the offending column.
pub fn pretty_error_message<'a>(
    input: Input<'a>,
    e: nom::Err<VerboseError<Input<'a>>>,
) -> String {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => nom::error::convert_error(input, e),
        nom::Err::Incomplete(_) => format!("{:?}: incomplete input", input),
    }
}

#[cfg(test)]
mod test {
    use super::context_trail;
    use nom::error::{ErrorKind, VerboseError, VerboseErrorKind};

    #[test]
    fn test_context_trail() {
        // nom pushes the innermost error first, so the trail has to be read backwards
        let e = VerboseError {
            errors: vec![
                ("x", VerboseErrorKind::Nom(ErrorKind::Digit)),
                ("x", VerboseErrorKind::Context("Minutes")),
                ("1 x", VerboseErrorKind::Context("Latitude")),
            ],
        };
        assert_eq!(context_trail(&e), "Latitude => Minutes");

        let e: VerboseError<&str> = VerboseError {
            errors: vec![("", VerboseErrorKind::Nom(ErrorKind::Eof))],
        };
        assert_eq!(context_trail(&e), "unexpected input");
    }
}
