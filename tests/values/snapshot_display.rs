use std::sync::Arc;

use insta::assert_snapshot;
use sass_host::runtime::{CompileContext, SassFunction, value::Value};

fn noop(_: &[Value]) -> Result<Value, String> {
    Ok(Value::Null)
}

#[test]
fn snapshot_compiler_function_display() {
    let context = CompileContext::new();
    assert_snapshot!(context.function(7).to_string(), @"<compiler function 7>");
}

#[test]
fn snapshot_host_function_display() {
    let function = SassFunction::host("foo($x, $y: 10px)", noop);
    assert_snapshot!(function.to_string(), @"foo($x, $y: 10px)");
}

#[test]
fn snapshot_list_of_functions() {
    let context = CompileContext::new();
    let list = Value::List(Arc::new(vec![
        Value::from(context.function(0)),
        Value::from(SassFunction::host("lighten($color, $amount)", noop)),
        Value::Null,
    ]));
    assert_snapshot!(list.to_string(), @"[<compiler function 0>, lighten($color, $amount), null]");
}

#[test]
fn snapshot_host_descriptor() {
    let function = SassFunction::host("double($n)", noop);
    let json = serde_json::to_string(&function.descriptor()).unwrap();
    assert_snapshot!(json, @r#"{"kind":"host","signature":"double($n)"}"#);
}

#[test]
fn compiler_descriptor_carries_context_serial() {
    let context = CompileContext::new();
    let json = serde_json::to_value(context.function(3).descriptor()).unwrap();

    assert_eq!(json["kind"], "compiler");
    assert_eq!(json["id"], 3);
    assert_eq!(json["context"], context.serial());
}
