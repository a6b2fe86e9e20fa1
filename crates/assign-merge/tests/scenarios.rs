//! End-to-end scenarios for the selective merge.

use std::sync::{Arc, Once};

use assign_merge::{assign_defined, assign_defined_with_report, AssignSource};
use assign_types::{Callable, Container, Key, Property, Value};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::json;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn obj(json: serde_json::Value) -> Container {
    Container::try_from(json).expect("fixture must be an object or array")
}

fn entries<const N: usize>(pairs: [(&str, Value); N]) -> Container {
    Container::from_entries(pairs)
}

#[test]
fn single_argument_is_unchanged() {
    init_tracing();
    let mut object = obj(json!({"test": 1}));
    let before = object.clone();
    let result = assign_defined(&mut object, std::iter::empty::<Container>()).unwrap();
    assert_eq!(result.to_json(), before.to_json());
}

#[test]
fn two_objects() {
    init_tracing();
    let mut object1 = obj(json!({"test": 1}));
    let object2 = obj(json!({"test": 2}));
    let result = assign_defined(&mut object1, [&object2]).unwrap();
    assert_eq!(result.to_json(), object2.to_json());
}

#[test]
fn result_is_the_same_reference() {
    init_tracing();
    let mut object1 = obj(json!({"test": 1}));
    let addr: *const Container = &object1;
    let result = assign_defined(&mut object1, [obj(json!({"test": 2}))]).unwrap();
    assert!(std::ptr::eq(result, addr));
}

#[test]
fn assigns_properties_and_keeps_reference() {
    init_tracing();
    let mut object1 = obj(json!({"test": 1, "best": 2}));
    let addr: *const Container = &object1;
    let object2 = obj(json!({"test": 2, "rest": 3}));
    let result = assign_defined(&mut object1, [&object2]).unwrap();
    assert!(std::ptr::eq(result, addr));
    assert_eq!(*result, obj(json!({"test": 2, "best": 2, "rest": 3})));
}

#[test]
fn three_objects() {
    init_tracing();
    let mut object1 = obj(json!({"test": 1, "best": 2}));
    let object2 = obj(json!({"test": 2, "rest": 3}));
    let object3 = obj(json!({"rest": 5, "fest": 4}));
    assign_defined(&mut object1, [&object2, &object3]).unwrap();
    assert_eq!(object1, obj(json!({"test": 2, "best": 2, "rest": 5, "fest": 4})));
}

#[test]
fn keeps_deep_references() {
    init_tracing();
    let ref1 = Arc::new(Container::object());
    let ref2 = Arc::new(entries([("ref1", Value::from(Arc::clone(&ref1)))]));
    let mut object1 = obj(json!({"test": 1, "best": 2}));
    let object2 = entries([("rest", Value::from(3)), ("test", Value::from(Arc::clone(&ref2)))]);
    let object3 = obj(json!({"rest": 5, "fest": 4}));

    let result = assign_defined(&mut object1, [&object2, &object3]).unwrap();

    let test = result.get_own("test").and_then(Value::as_container).unwrap();
    assert!(Arc::ptr_eq(test, &ref2));
    let nested = test.get_own("ref1").and_then(Value::as_container).unwrap();
    assert!(Arc::ptr_eq(nested, &ref1));
    assert_eq!(result.get_own("rest"), Some(&Value::from(5)));
    assert_eq!(result.get_own("fest"), Some(&Value::from(4)));
    assert_eq!(result.get_own("best"), Some(&Value::from(2)));
}

#[test]
fn works_with_arrays() {
    init_tracing();
    let mut arr1 = Container::array_of([1]);
    let arr2 = Container::array_of([2, 3, 4]);
    let arr3 = Container::array_of([5]);
    let result = assign_defined(&mut arr1, [&arr2, &arr3]).unwrap();
    assert_eq!(*result, Container::array_of([5, 3, 4]));
    assert_eq!(result.array_length(), Some(3));
}

#[test]
fn keeps_nested_arrays() {
    init_tracing();
    let arr = Arc::new(Container::array_of([2, 3]));
    let mut arr1 = Container::array_of([1]);
    let arr2 = Container::array_of([2, 3, 4]);
    let arr3 = Container::array_of([Value::from(Arc::clone(&arr))]);

    let result = assign_defined(&mut arr1, [&arr2, &arr3]).unwrap();

    assert_eq!(result.to_json(), json!([[2, 3], 3, 4]));
    let first = result.get_own(0).and_then(Value::as_container).unwrap();
    assert!(Arc::ptr_eq(first, &arr));
    assert_eq!(first.array_length(), Some(2));
}

#[test]
fn really_skips_undefined_values() {
    init_tracing();
    let mut object1 = obj(json!({"test": 1}));
    let object2 = entries([("test", Value::Undefined)]);
    assign_defined(&mut object1, [&object2]).unwrap();
    assert_eq!(object1, obj(json!({"test": 1})));
}

#[test]
fn keeps_undefined_already_on_destination() {
    init_tracing();
    let mut object1 = entries([("test", Value::Undefined)]);
    let object2 = obj(json!({"best": 1}));
    assign_defined(&mut object1, [&object2]).unwrap();

    assert_eq!(
        object1,
        entries([("test", Value::Undefined), ("best", Value::from(1))])
    );
    let keys: Vec<_> = object1.keys().cloned().collect();
    assert_eq!(keys, vec![Key::from("test"), Key::from("best")]);
    assert_eq!(object1.get_own("test"), Some(&Value::Undefined));
}

#[test]
fn does_not_fail_on_or_copy_null_sources() {
    init_tracing();
    let mut object1 = obj(json!({"test": 1}));
    assign_defined(&mut object1, [None::<&Container>]).unwrap();
    assert_eq!(object1, obj(json!({"test": 1})));

    assign_defined(&mut object1, [Value::Null, Value::Undefined]).unwrap();
    assert_eq!(object1, obj(json!({"test": 1})));
}

#[test]
fn null_source_matches_no_source() {
    init_tracing();
    let mut with_null = obj(json!({"a": 1, "b": [1, 2]}));
    let mut without = with_null.clone();
    assign_defined(&mut with_null, [None::<Container>]).unwrap();
    assign_defined(&mut without, std::iter::empty::<Container>()).unwrap();
    assert_eq!(with_null, without);
}

#[test]
fn does_not_copy_non_enumerable_properties() {
    init_tracing();
    let mut object1 = obj(json!({"test": 1}));
    let date = Container::date(1_700_000_000_000);
    assign_defined(&mut object1, [&date]).unwrap();
    assert_eq!(object1, obj(json!({"test": 1})));

    let mut hiding = Container::object();
    hiding.define("secret", Property::hidden(42)).unwrap();
    assign_defined(&mut object1, [&hiding]).unwrap();
    assert!(!object1.has_own("secret"));
}

#[test]
fn does_not_copy_inherited_properties() {
    init_tracing();
    let proto = Arc::new(obj(json!({"inherited": true})));
    let source = obj(json!({"own": 1})).with_prototype(proto);
    assert_eq!(source.get("inherited"), Some(&Value::Bool(true)));

    let mut dest = Container::object();
    assign_defined(&mut dest, [&source]).unwrap();
    assert_eq!(dest, obj(json!({"own": 1})));
    assert_eq!(dest.get("inherited"), None);
}

#[test]
fn does_not_call_or_change_functions() {
    init_tracing();
    let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let f = Callable::new(move |_| {
        counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Value::from(5)
    });
    let mut object1 = obj(json!({"test": 1}));
    let object2 = entries([("test", Value::from(f.clone()))]);

    let result = assign_defined(&mut object1, [&object2]).unwrap();
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);

    let copied = result.get_own("test").and_then(Value::as_callable).unwrap();
    assert!(copied.ptr_eq(&f));
    assert_eq!(copied.call(&[]), Value::from(5));
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn string_source_spreads_characters() {
    init_tracing();
    let mut dest = Container::object();
    assign_defined(&mut dest, [Value::from("ab")]).unwrap();
    assert_eq!(dest.to_json(), json!({"0": "a", "1": "b"}));
}

#[test]
fn mixed_object_and_array_sources() {
    init_tracing();
    let mut dest = Container::array_of([1, 2]);
    let named = obj(json!({"1": "one", "label": "x"}));
    assign_defined(&mut dest, [&named]).unwrap();
    assert_eq!(dest.get_own(1), Some(&Value::from("one")));
    assert_eq!(dest.get_own("label"), Some(&Value::from("x")));
    assert_eq!(dest.array_length(), Some(2));
}

#[test]
fn integer_keys_past_index_range_leave_array_length_alone() {
    init_tracing();
    let mut dest = Container::array();
    let source = obj(json!({"4294967295": 1, "4294967294": 2}));
    assign_defined(&mut dest, [&source]).unwrap();

    assert_eq!(dest.array_length(), Some(4_294_967_295));
    assert_eq!(dest.get_own("4294967295"), Some(&Value::from(1)));

    let mut small = Container::array_of([1]);
    let huge = obj(json!({"18446744073709551615": 1}));
    assign_defined(&mut small, [&huge]).unwrap();
    assert_eq!(small.array_length(), Some(1));
    assert_eq!(small.to_json(), json!([1]));
}

#[test]
fn merged_keys_keep_insertion_order() {
    init_tracing();
    let mut dest = obj(json!({"b": 1}));
    assign_defined(&mut dest, [obj(json!({"a": 2, "b": 3}))]).unwrap();
    assert_eq!(serde_json::to_string(&dest).unwrap(), r#"{"b":3,"a":2}"#);
}

#[test]
fn length_key_resizes_array_destination() {
    init_tracing();
    let mut dest = Container::array_of([1, 2, 3]);
    assign_defined(&mut dest, [obj(json!({"length": 1}))]).unwrap();
    assert_eq!(dest.to_json(), json!([1]));

    let err = assign_defined(&mut dest, [obj(json!({"length": -1}))]).unwrap_err();
    assert!(err.to_string().contains("invalid array length"));
    assert_eq!(dest.array_length(), Some(1));
}

fn run_for_n_sources(n: usize) {
    init_tracing();
    let random_props = ["duck", "best", "text", "fest"];
    let mut rng = rand::thread_rng();

    let mut args: Vec<Container> = vec![
        entries([("test", Value::Null), ("best", Value::from(2))]),
        entries([("test", Value::from(2)), ("rest", Value::from(3))]),
    ];
    for _ in 0..n.saturating_sub(5) {
        let prop = random_props.choose(&mut rng).copied().unwrap_or("duck");
        args.push(entries([(prop, Value::from(rng.gen::<f64>()))]));
    }
    let tail = Arc::new(Container::array_of([1, 2, 3]));
    args.push(entries([
        ("rest", Value::from(5)),
        ("fest", Value::from(4)),
        ("duck", Value::Undefined),
    ]));
    args.push(entries([
        ("rest", Value::from(Arc::clone(&tail))),
        ("fest", Value::Null),
        ("test", Value::from(10)),
    ]));
    args.push(entries([
        ("text", Value::from("undefined")),
        ("best", Value::from(f64::NEG_INFINITY)),
        ("duck", Value::from(f64::NAN)),
        ("test", Value::Undefined),
    ]));

    let mut dest = args.remove(0);
    let (result, report) = assign_defined_with_report(&mut dest, &args).unwrap();

    let expected = entries([
        ("test", Value::from(10)),
        ("best", Value::from(f64::NEG_INFINITY)),
        ("rest", Value::from(Container::array_of([1, 2, 3]))),
        ("fest", Value::Null),
        ("text", Value::from("undefined")),
        ("duck", Value::from(f64::NAN)),
    ]);
    assert_eq!(*result, expected);
    assert!(result.get_own("rest").unwrap().same(&Value::from(tail)));
    assert_eq!(report.sources, args.len());
    assert_eq!(report.skipped_undefined, 2);
}

#[test]
fn handles_250_sources() {
    run_for_n_sources(250);
}

#[test]
fn handles_100000_sources() {
    run_for_n_sources(100_000);
}

#[test]
fn sources_of_mixed_kinds() {
    init_tracing();
    let shared = Arc::new(obj(json!({"shared": true})));
    let value_source = Value::from(obj(json!({"from_value": 1})));
    let null = Value::Null;
    let mut dest = Container::object();

    let sources: Vec<&dyn AssignSource> = vec![&shared, &value_source, &null];
    assign_defined(&mut dest, sources).unwrap();

    assert_eq!(dest, obj(json!({"shared": true, "from_value": 1})));
}
