use tern_diagnostic::ErrorCode;

/// Long-form text for an error code, or `None` if the code is unknown.
pub fn explain(code_str: &str) -> Option<String> {
    let code = code_str.parse::<ErrorCode>().ok()?;
    Some(format!("{code}: {}", code.description()))
}

/// Print the explanation for an error code, exiting with 1 if unknown.
pub fn explain_error(code_str: &str) {
    let Some(text) = explain(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        let known: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        eprintln!("Known codes: {}", known.join(", "));
        std::process::exit(1);
    };
    println!("{text}");
}
