//! End-to-end coverage of the default conversion: classification,
//! absence, inheritance, enums, raw values, collections and encoding.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wrapmap::{
    Composite, DateFormat, EncodeOptions, MAX_WRAP_DEPTH, WrapError, WrapRef, Wrappable,
    WrappableKey, Wrapper, impl_wrappable_enum, impl_wrappable_raw_enum, impl_wrappable_struct,
    wrap, wrap_many, wrap_to_bytes,
};

#[test]
fn wraps_plain_struct_fields() {
    struct Totals {
        string: String,
        int: i32,
        double: f64,
    }
    impl_wrappable_struct!(Totals { string, int, double });

    let totals = Totals {
        string: "A string".to_owned(),
        int: 5,
        double: 2.5,
    };

    let map = wrap(&totals).unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "string": "A string",
            "int": 5,
            "double": 2.5,
        })
    );
}

#[test]
fn omits_absent_optional_fields() {
    struct Totals {
        string: String,
        int: i32,
        missing: Option<String>,
    }
    impl_wrappable_struct!(Totals {
        string,
        int,
        missing
    });

    let totals = Totals {
        string: "A string".to_owned(),
        int: 5,
        missing: None,
    };

    let map = wrap(&totals).unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "string": "A string",
            "int": 5,
        })
    );
}

#[test]
fn unwraps_nested_optionals() {
    struct Levels {
        present: Option<Option<i32>>,
        hollow: Option<Option<i32>>,
        empty: Option<Option<i32>>,
    }
    impl_wrappable_struct!(Levels {
        present,
        hollow,
        empty
    });

    let levels = Levels {
        present: Some(Some(7)),
        hollow: Some(None),
        empty: None,
    };

    let map = wrap(&levels).unwrap();
    assert_eq!(Value::Object(map), json!({ "present": 7 }));
}

#[test]
fn empty_struct_wraps_to_empty_mapping() {
    struct Nothing {}
    impl_wrappable_struct!(Nothing {});

    let map = wrap(&Nothing {}).unwrap();
    assert!(map.is_empty());
}

#[test]
fn inherited_fields_convert_ancestor_first() {
    struct Base {
        id: u32,
        label: String,
    }
    struct Derived {
        base: Base,
        label: String,
    }
    impl_wrappable_struct!(Base { id, label });
    impl_wrappable_struct!(Derived: base { label });

    let derived = Derived {
        base: Base {
            id: 1,
            label: "base".to_owned(),
        },
        label: "derived".to_owned(),
    };

    // The colliding key keeps the derived value.
    let map = wrap(&derived).unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "id": 1,
            "label": "derived",
        })
    );
}

#[test]
fn enum_cases_wrap_by_shape() {
    enum Either {
        First,
        Second(String),
        Pair(i32, i32),
    }
    impl_wrappable_enum!(Either {
        First,
        Second(message),
        Pair(first, second)
    });

    struct Holder {
        value: Either,
    }
    impl_wrappable_struct!(Holder { value });

    // A no-payload case in leaf position is its name string.
    let map = wrap(&Holder {
        value: Either::First,
    })
    .unwrap();
    assert_eq!(Value::Object(map), json!({ "value": "First" }));

    // A payload case nests as {case_name: payload}.
    let map = wrap(&Holder {
        value: Either::Second("Hello".to_owned()),
    })
    .unwrap();
    assert_eq!(Value::Object(map), json!({ "value": { "Second": "Hello" } }));

    // Only the first payload value is converted.
    let map = wrap(&Holder {
        value: Either::Pair(1, 2),
    })
    .unwrap();
    assert_eq!(Value::Object(map), json!({ "value": { "Pair": 1 } }));
}

#[test]
fn enum_cases_at_top_level() {
    enum Either {
        First,
        Second(String),
    }
    impl_wrappable_enum!(Either { First, Second(message) });

    // A no-payload case yields an empty mapping at top level.
    let map = wrap(&Either::First).unwrap();
    assert!(map.is_empty());

    let map = wrap(&Either::Second("Hello".to_owned())).unwrap();
    assert_eq!(Value::Object(map), json!({ "Second": "Hello" }));
}

#[test]
fn raw_enums_wrap_to_their_raw_value() {
    #[derive(Clone, Copy)]
    enum Speed {
        Slow = 1,
        Fast = 5,
    }
    enum Plan {
        Free,
        Pro,
    }
    impl_wrappable_raw_enum!(Speed as i64);
    impl_wrappable_raw_enum!(Plan {
        Free => "free",
        Pro => "pro",
    });

    struct Account {
        speed: Speed,
        plan: Plan,
    }
    impl_wrappable_struct!(Account { speed, plan });

    let map = wrap(&Account {
        speed: Speed::Fast,
        plan: Plan::Pro,
    })
    .unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "speed": 5,
            "plan": "pro",
        })
    );

    let _ = Speed::Slow;
    let _ = Plan::Free;

    // Raw enums never get the empty-mapping treatment of payload-free
    // variants at top level.
    let error = wrap(&Speed::Fast).unwrap_err();
    assert!(matches!(error, WrapError::InvalidTopLevelValue { .. }));
}

#[test]
fn bare_values_are_invalid_at_top_level() {
    let error = wrap(&"A string").unwrap_err();
    assert!(matches!(error, WrapError::InvalidTopLevelValue { .. }));

    let error = wrap(&vec![1, 2, 3]).unwrap_err();
    assert!(matches!(error, WrapError::InvalidTopLevelValue { .. }));
}

#[test]
fn wraps_collections_recursively() {
    struct Inventory {
        tags: Vec<String>,
        counts: BTreeMap<String, u32>,
        lookup: BTreeMap<u8, &'static str>,
        triple: [u8; 3],
    }
    impl_wrappable_struct!(Inventory {
        tags,
        counts,
        lookup,
        triple
    });

    let inventory = Inventory {
        tags: vec!["new".to_owned(), "sale".to_owned()],
        counts: BTreeMap::from([("apples".to_owned(), 3), ("pears".to_owned(), 1)]),
        lookup: BTreeMap::from([(7, "seven")]),
        triple: [1, 2, 3],
    };

    let map = wrap(&inventory).unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "tags": ["new", "sale"],
            "counts": { "apples": 3, "pears": 1 },
            // Non-string keys are stringified.
            "lookup": { "7": "seven" },
            "triple": [1, 2, 3],
        })
    );
}

#[test]
fn keys_without_a_string_form_drop_their_entries() {
    #[derive(PartialEq, Eq, PartialOrd, Ord)]
    struct Tag(Option<&'static str>);

    impl WrappableKey for Tag {
        fn wrap_key(&self) -> Option<String> {
            self.0.map(str::to_owned)
        }
    }

    struct Tagged {
        entries: BTreeMap<Tag, i32>,
    }
    impl_wrappable_struct!(Tagged { entries });

    let tagged = Tagged {
        entries: BTreeMap::from([(Tag(Some("kept")), 1), (Tag(None), 2)]),
    };

    let map = wrap(&tagged).unwrap();
    assert_eq!(Value::Object(map), json!({ "entries": { "kept": 1 } }));
}

#[test]
fn sequences_drop_absent_elements() {
    struct Sparse {
        values: Vec<Option<i32>>,
    }
    impl_wrappable_struct!(Sparse { values });

    let sparse = Sparse {
        values: vec![Some(1), None, Some(3)],
    };

    let map = wrap(&sparse).unwrap();
    assert_eq!(Value::Object(map), json!({ "values": [1, 3] }));
}

#[test]
fn function_values_are_omitted() {
    struct Callbacks {
        name: String,
        on_click: fn(),
    }
    impl_wrappable_struct!(Callbacks { name, on_click });

    fn click() {}

    let map = wrap(&Callbacks {
        name: "button".to_owned(),
        on_click: click,
    })
    .unwrap();
    assert_eq!(Value::Object(map), json!({ "name": "button" }));
}

#[test]
fn non_finite_floats_are_omitted() {
    struct Readings {
        valid: f64,
        not_a_number: f64,
        unbounded: f64,
    }
    impl_wrappable_struct!(Readings {
        valid,
        not_a_number,
        unbounded
    });

    let readings = Readings {
        valid: 1.5,
        not_a_number: f64::NAN,
        unbounded: f64::INFINITY,
    };

    let map = wrap(&readings).unwrap();
    assert_eq!(Value::Object(map), json!({ "valid": 1.5 }));
}

#[test]
fn dates_format_with_the_default_pattern() {
    struct Event {
        at: chrono::NaiveDateTime,
    }
    impl_wrappable_struct!(Event { at });

    let event = Event {
        at: NaiveDate::from_ymd_opt(2024, 1, 30)
            .unwrap()
            .and_hms_opt(13, 5, 59)
            .unwrap(),
    };

    let map = wrap(&event).unwrap();
    assert_eq!(Value::Object(map), json!({ "at": "2024-01-30 13:05:59" }));
}

#[test]
fn dates_format_with_a_supplied_pattern() {
    struct Event {
        at: chrono::NaiveDateTime,
    }
    impl_wrappable_struct!(Event { at });

    let event = Event {
        at: NaiveDate::from_ymd_opt(2024, 1, 30)
            .unwrap()
            .and_hms_opt(13, 5, 59)
            .unwrap(),
    };

    let map = Wrapper::new()
        .with_date_format(DateFormat::new("%Y-%m-%d"))
        .wrap(&event)
        .unwrap();
    assert_eq!(Value::Object(map), json!({ "at": "2024-01-30" }));
}

#[test]
fn rewrapping_a_produced_mapping_is_identity() {
    struct Totals {
        string: String,
        int: i32,
        tags: Vec<String>,
    }
    impl_wrappable_struct!(Totals { string, int, tags });

    let totals = Totals {
        string: "A string".to_owned(),
        int: 5,
        tags: vec!["a".to_owned()],
    };

    let once = wrap(&totals).unwrap();
    let twice = wrap(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn wrap_many_converts_elementwise() {
    struct Totals {
        int: i32,
    }
    impl_wrappable_struct!(Totals { int });

    let maps = wrap_many(&[Totals { int: 1 }, Totals { int: 2 }]).unwrap();
    assert_eq!(maps.len(), 2);
    assert_eq!(maps[0]["int"], 1);
    assert_eq!(maps[1]["int"], 2);
}

#[test]
fn wrap_many_aborts_on_the_first_failure() {
    let error = wrap_many(&["first", "second"]).unwrap_err();
    assert!(matches!(error, WrapError::InvalidTopLevelValue { .. }));
}

#[test]
fn encodes_mappings_to_bytes() {
    struct One {
        int: i32,
    }
    impl_wrappable_struct!(One { int });

    let compact = wrap_to_bytes(&One { int: 5 }, EncodeOptions::compact()).unwrap();
    assert_eq!(compact, br#"{"int":5}"#);

    let pretty = wrap_to_bytes(&One { int: 5 }, EncodeOptions::pretty()).unwrap();
    assert!(pretty.contains(&b'\n'));
    let reparsed: Value = serde_json::from_slice(&pretty).unwrap();
    assert_eq!(reparsed, json!({ "int": 5 }));
}

#[test]
fn self_referential_values_hit_the_depth_limit() {
    struct Ouroboros;

    impl Wrappable for Ouroboros {
        fn wrap_ref(&self) -> WrapRef<'_> {
            WrapRef::Composite(self)
        }
    }

    impl Composite for Ouroboros {
        fn field_len(&self) -> usize {
            1
        }

        fn name_at(&self, index: usize) -> Option<&str> {
            (index == 0).then_some("next")
        }

        fn field_at(&self, index: usize) -> Option<&dyn Wrappable> {
            (index == 0).then_some(self as &dyn Wrappable)
        }
    }

    let error = wrap(&Ouroboros).unwrap_err();
    match error {
        WrapError::CyclicStructure { depth, .. } => assert_eq!(depth, MAX_WRAP_DEPTH),
        other => panic!("expected CyclicStructure, got {other}"),
    }
}
