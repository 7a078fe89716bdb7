use crate::define::{
    define_on,
    error::{DefineError, Operation},
};
use crate::diagnostics::report_define_error;
use crate::runtime::{Function, Object, Value};

fn snapshot(obj: &Object) -> Vec<(String, Value)> {
    obj.keys()
        .into_iter()
        .map(|key| {
            let value = obj.get(&key).expect("readable");
            (key, value)
        })
        .collect()
}

#[test]
fn bad_shapes_fail_without_touching_the_target() {
    let obj = Object::new();
    let mut definer = define_on(&obj);
    definer
        .var(("x", 1))
        .expect("x")
        .constant(("y", "done"))
        .expect("y");
    let before = snapshot(&obj);

    let failures = [
        definer.get(("x", 2)).map(|_| ()),
        definer.set(Value::from("x")).map(|_| ()),
        definer.eval(("x", Value::Null)).map(|_| ()),
        definer.var(Value::Int(3)).map(|_| ()),
        definer.constant(("x", Value::Undefined)).map(|_| ()),
        definer.var(("", 4)).map(|_| ()),
        definer.get(Function::new(|_, _| Ok(Value::Null))).map(|_| ()),
    ];
    for result in failures {
        let err = result.expect_err("shape must be rejected");
        report_define_error(&err);
        assert!(err.is_argument_shape(), "not a shape error: {err:?}");
    }

    assert_eq!(snapshot(&obj), before);
    let err = definer
        .var(("y", "again"))
        .map(|_| ())
        .expect_err("y is constant");
    assert!(matches!(err, DefineError::Property { .. }));
    assert!(!err.is_argument_shape());
    assert!(definer.pending().is_empty());
}

#[test]
fn shape_errors_name_the_operation_and_observed_types() {
    let obj = Object::new();
    let mut definer = define_on(&obj);

    let err = definer.eval(("x", 2)).map(|_| ()).expect_err("int thunk");
    assert_eq!(err.operation(), Operation::Eval);
    assert_eq!(
        err.to_string(),
        "define().eval expects arguments of type (function) or (string, function) instead got (string, int)"
    );

    let err = definer
        .constant(("label", Value::Undefined))
        .map(|_| ())
        .expect_err("undefined value");
    assert_eq!(
        err.to_string(),
        "define().const expects a value as the second argument for `label` (instead got undefined)"
    );

    let err = definer
        .set(Function::new(|_, _| Ok(Value::Null)))
        .map(|_| ())
        .expect_err("anonymous setter");
    assert_eq!(err.to_string(), "define().set: no name specified for (function)");
}

#[test]
fn earlier_definitions_survive_a_failed_call() {
    let obj = Object::new();
    let mut definer = define_on(&obj);
    definer.var(("kept", true)).expect("kept");
    assert!(definer.var(Value::Bool(false)).is_err());
    definer.var(("after", 2)).expect("chain continues");
    assert_eq!(obj.keys(), vec!["kept".to_string(), "after".to_string()]);
}
