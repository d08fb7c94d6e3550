//! Exercises the process-wide default key style. Kept as a single test in
//! its own binary: mutating the process-wide cell would race with tests
//! running in parallel threads.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wrapmap::{KeyStyle, default_key_style, impl_wrappable_struct, set_default_key_style, wrap};

#[test]
fn process_default_style_applies_to_unstyled_composites() {
    #[allow(non_snake_case)]
    struct Request {
        requestURL: String,
        statusCode: u16,
    }
    impl_wrappable_struct!(Request {
        requestURL,
        statusCode
    });

    assert_eq!(default_key_style(), KeyStyle::MatchFieldName);

    let request = Request {
        requestURL: "/home".to_owned(),
        statusCode: 200,
    };

    let map = wrap(&request).unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "requestURL": "/home",
            "statusCode": 200,
        })
    );

    set_default_key_style(KeyStyle::SnakeCase);
    assert_eq!(default_key_style(), KeyStyle::SnakeCase);

    let request = Request {
        requestURL: "/home".to_owned(),
        statusCode: 200,
    };

    let map = wrap(&request).unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "request_url": "/home",
            "status_code": 200,
        })
    );

    set_default_key_style(KeyStyle::MatchFieldName);
}
