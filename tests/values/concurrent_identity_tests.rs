use std::collections::HashSet;

use rayon::prelude::*;
use sass_host::runtime::{CompileContext, SassFunction, value::Value};

fn noop(_: &[Value]) -> Result<Value, String> {
    Ok(Value::Null)
}

#[test]
fn identity_operations_agree_across_threads() {
    let context = CompileContext::new();
    let host = SassFunction::host("double($n)", noop);
    let functions: Vec<SassFunction> = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                context.function(i / 2)
            } else {
                host.clone()
            }
        })
        .collect();

    let expected: Vec<(u64, String)> = functions
        .iter()
        .map(|f| (f.hash_code(), f.to_string()))
        .collect();
    let parallel: Vec<(u64, String)> = functions
        .par_iter()
        .map(|f| (f.hash_code(), f.to_string()))
        .collect();

    assert_eq!(expected, parallel);
    assert!(functions.par_iter().all(|f| *f == f.clone()));
    assert!(functions.par_iter().skip(1).step_by(2).all(|f| *f == host));
}

#[test]
fn parallel_dedup_matches_sequential() {
    let context = CompileContext::new();
    let other = CompileContext::new();
    let values: Vec<Value> = (0..200u32)
        .map(|i| {
            let ctx = if i % 3 == 0 { &other } else { &context };
            Value::from(ctx.function(i % 10))
        })
        .collect();

    let sequential: HashSet<Value> = values.iter().cloned().collect();
    let parallel: HashSet<Value> = values.par_iter().cloned().collect();

    assert_eq!(sequential, parallel);
    assert_eq!(sequential.len(), 20);
}
