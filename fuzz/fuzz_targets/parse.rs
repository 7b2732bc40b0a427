#![cfg_attr(fuzzing, no_main)]

use libfuzzer_sys::fuzz_target;

use temporal_iso8601::{Parser, Production};

mod shim;

fn do_fuzz(data: &[u8]) {
    const PARSER: Parser = Parser::new();

    let Ok(input) = std::str::from_utf8(data) else { return };
    for production in Production::ALL {
        let result = match PARSER.try_parse(production, input) {
            Ok(result) => result,
            Err(err) => {
                assert!(
                    PARSER.parse(production, input).is_none(),
                    "try_parse failed with `{err}`, but parse succeeded",
                );
                continue;
            }
        };
        assert_eq!(input, result.input());
        for (field, value) in result.iter() {
            let span = result
                .span(field)
                .expect("a present field always has a span");
            assert!(span.end <= input.len(), "{field} out of bounds");
            assert!(input.is_char_boundary(span.start));
            assert!(input.is_char_boundary(span.end));
            assert_eq!(value, &input[span]);
        }

        // Anything appended must make the whole parse fail.
        let longer = format!("{input}\0");
        let err = PARSER
            .try_parse(production, &longer)
            .expect_err("a match must consume all of its input");
        assert!(
            err.is_trailing_input(),
            "expected {production} to match a prefix of {longer:?}, \
             but got `{err}`",
        );
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
